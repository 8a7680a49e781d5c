use crate::constants::method;

/// Read-only view of the request fields the policy engine consults.
///
/// `None` means the header was absent. An empty value still counts as present.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl RequestContext<'_> {
    pub fn is_options(&self) -> bool {
        self.method.eq_ignore_ascii_case(method::OPTIONS)
    }
}
