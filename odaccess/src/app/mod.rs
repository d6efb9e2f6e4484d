mod odcm_app;
mod odcm_app_error;
mod odcm_args;
mod odcm_operation;

pub use odcm_app::OdcmApp;
pub use odcm_app_error::OdcmAppError;
pub use odcm_args::OdcmArgs;
pub use odcm_operation::OdcmOperation;
