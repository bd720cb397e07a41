#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("rating.score_required")]
    ScoreRequired,
    #[error("rating.score_out_of_range")]
    ScoreOutOfRange,
    #[error("rating.client_info_missing")]
    ClientInfoMissing,
    #[error("gateway.failure")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
