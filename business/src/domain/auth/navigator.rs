/// Producer login page; 401 responses land here.
pub const LOGIN_ROUTE: &str = "/login-produtor";
pub const PRODUCER_DASHBOARD_ROUTE: &str = "/dashboard-produtor";
pub const CLIENT_HOME_ROUTE: &str = "/dashboard-cliente";

/// The session's current page.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str);

    fn is_on_login_page(&self) -> bool {
        self.current_path().contains("/login")
    }
}
