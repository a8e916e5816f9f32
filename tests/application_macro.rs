//! Application root taken from the calling crate at compile time.

#[test]
fn macro_uses_calling_crate_name() {
    let log = pi_log::application_logger!().unwrap();
    assert_eq!(log.name(), "application_macro");

    let log = pi_log::application_logger!(Some("debug".into())).unwrap();
    assert_eq!(log.name(), "application_macro");
    assert_eq!(log.effective_level(), pi_log::DEBUG);
}
