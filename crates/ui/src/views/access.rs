use services::Identity;

/// Whether the current user may open a protected test route.
///
/// The path carries the owner's user id; it must match the signed-in
/// user, and the test id must be present.
pub(crate) fn attempt_access_allowed(
    identity: &dyn Identity,
    path_user_id: &str,
    test_id: &str,
) -> bool {
    if test_id.is_empty() {
        return false;
    }
    identity
        .current_user_id()
        .is_some_and(|current| current.as_str() == path_user_id)
}
