use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Session,
    Catalog,
    Cart,
    Checkout,
    Orders,
    Auth,
    Producer,
}
