//! HTML views served to the browser.

use salvo::prelude::*;

const LOGIN_HTML: &str = include_str!("../assets/login.html");
const ADMIN_HTML: &str = include_str!("../assets/admin.html");

/// Password form.
#[handler]
pub(crate) async fn login(res: &mut Response) {
    res.render(Text::Html(LOGIN_HTML));
}

/// Admin shell; everything it shows comes from the JSON API.
#[handler]
pub(crate) async fn admin(res: &mut Response) {
    res.render(Text::Html(ADMIN_HTML));
}
