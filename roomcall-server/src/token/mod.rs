mod access_token;
mod credentials;
mod grant;
mod issuer;

pub use access_token::*;
pub use credentials::Credentials;
pub use grant::{Grants, VideoGrant};
pub use issuer::{TokenError, TokenIssuer};
