//! Route pattern extraction utilities.

use actix_web::HttpRequest;

/// Label for requests that matched no registered route
pub const UNMATCHED_ROUTE: &str = "/unmatched";

/// The registered route pattern for a request, e.g. `/api/projects/{project_id}`
///
/// Using the pattern instead of the raw path keeps metric label cardinality
/// bounded.
pub fn extract_route_pattern(req: &HttpRequest) -> String {
    req.match_pattern()
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_unrouted_request_is_grouped() {
        let req = TestRequest::get().uri("/random/path").to_http_request();
        assert_eq!(extract_route_pattern(&req), UNMATCHED_ROUTE);
    }
}
