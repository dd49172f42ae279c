pub(crate) enum AppState {
    Bootstrapping(BootstrapState),
    Running(RunningState),
    Failed(FailedState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Bootstrapping(BootstrapState)
    }
}

#[derive(Default, Clone)]
pub(crate) struct BootstrapState;

#[derive(Default, Clone)]
pub(crate) struct RunningState;

/// The data source could not be constructed; nothing to run.
#[derive(Default, Clone)]
pub(crate) struct FailedState {
    pub(crate) message: String,
}
