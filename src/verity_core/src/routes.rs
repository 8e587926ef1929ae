/// Pages of the verification flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Username, password and phone number form.
    CodeRequest,
    /// One-time code form.
    CodeVerification,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::CodeRequest => "/",
            Self::CodeVerification => "/verify",
        }
    }
}
