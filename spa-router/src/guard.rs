/// Guard over the admin dashboard route.
///
/// The guard starts in `Checking`, is seeded with the locally persisted
/// token (if any), and settles to `Authenticated` or `Unauthenticated`;
/// the latter renders a redirect to the login page.
///
/// Token presence alone is never enough: the guard verifies the token
/// through the [`TokenVerifier`] seam before granting access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Unauthenticated,
    Authenticated,
}

/// Verification seam so the guard can run against the real token service or
/// a test stub.
pub trait TokenVerifier {
    fn is_valid(&self, token: &str) -> bool;
}

impl<F> TokenVerifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid(&self, token: &str) -> bool {
        self(token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteGuard {
    state: GuardState,
}

impl Default for GuardState {
    fn default() -> Self {
        GuardState::Checking
    }
}

impl RouteGuard {
    pub fn new() -> Self {
        Self { state: GuardState::Checking }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Evaluate the stored token and settle the guard.
    pub fn evaluate(&mut self, stored_token: Option<&str>, verifier: &dyn TokenVerifier) -> GuardState {
        self.state = match stored_token {
            Some(token) if verifier.is_valid(token) => GuardState::Authenticated,
            _ => GuardState::Unauthenticated,
        };
        self.state
    }

    /// Client-side logout: drop back to `Unauthenticated`. The token itself
    /// is deleted by the caller; nothing is revoked server-side.
    pub fn reset(&mut self) {
        self.state = GuardState::Unauthenticated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_starts_checking() {
        assert_eq!(RouteGuard::new().state(), GuardState::Checking);
    }

    #[test]
    fn missing_token_is_unauthenticated() {
        let mut guard = RouteGuard::new();
        assert_eq!(
            guard.evaluate(None, &|_: &str| true),
            GuardState::Unauthenticated
        );
    }

    #[test]
    fn present_but_invalid_token_is_unauthenticated() {
        // Token presence alone is not enough: the verifier has the last
        // word.
        let mut guard = RouteGuard::new();
        assert_eq!(
            guard.evaluate(Some("stale-token"), &|_: &str| false),
            GuardState::Unauthenticated
        );
    }

    #[test]
    fn verified_token_is_authenticated() {
        let mut guard = RouteGuard::new();
        assert_eq!(
            guard.evaluate(Some("good-token"), &|t: &str| t == "good-token"),
            GuardState::Authenticated
        );
    }

    #[test]
    fn reset_drops_authentication() {
        let mut guard = RouteGuard::new();
        guard.evaluate(Some("good-token"), &|_: &str| true);
        guard.reset();
        assert_eq!(guard.state(), GuardState::Unauthenticated);
    }
}
