/// How a response status is turned into a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 200: the body gets decoded.
    Success,
    /// 404, 403 or 500: the code is handed to the completion handler.
    Reported(u16),
    /// Anything else. Dropped unless the requester reports unhandled statuses.
    Unhandled(u16),
}

impl StatusClass {
    pub fn from_status(status: u16) -> Self {
        match status {
            200 => StatusClass::Success,
            404 | 403 | 500 => StatusClass::Reported(status),
            other => StatusClass::Unhandled(other),
        }
    }
}
