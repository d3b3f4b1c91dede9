/// Capability for the exclusive full-screen presentation mode.
///
/// The engine only emits `EnterExclusive`/`ExitExclusive` effects; a
/// host binds this trait to its real presentation surface. Exit
/// notifications travel the other way, as `AttemptEvent::GuardExited`
/// dispatched by whatever watches the surface.
///
/// Implementations must treat a rejected enter request as non-fatal:
/// log it and carry on, the attempt continues without guard protection.
pub trait ExclusiveModeGuard {
    /// Request exclusive presentation on the bound surface.
    fn enter(&self);

    /// Leave exclusive presentation. Must be idempotent; called on
    /// every exit from the active phase regardless of trigger.
    fn exit(&self);
}

/// Guard that does nothing. Used headless and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopGuard;

impl ExclusiveModeGuard for NoopGuard {
    fn enter(&self) {}

    fn exit(&self) {}
}
