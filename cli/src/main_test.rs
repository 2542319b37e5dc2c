use super::*;

#[test]
fn form_args_override_only_given_fields() {
    let args = FormArgs {
        ages: Some("4, 7".to_owned()),
        location: Some("Geneva".to_owned()),
        ..FormArgs::default()
    };
    let fields = args.into_fields(FormFields::default());
    assert_eq!(fields.ages, "4, 7");
    assert_eq!(fields.location, "Geneva");
    assert_eq!(fields.num_children, "1");
    assert_eq!(fields.weather, "sunny");
    assert_eq!(fields.special_cases, "No special case.");
}

#[test]
fn resolve_config_fills_local_default_for_same_origin() {
    let cfg = resolve_config(ClientConfig::default(), None, None).unwrap();
    assert_eq!(cfg.endpoint_url(), "http://127.0.0.1:8888/api/activities");
}

#[test]
fn resolve_config_prefers_flag_over_env_value() {
    let env_cfg = ClientConfig::default().with_base_url("http://env.test").unwrap();
    let cfg = resolve_config(env_cfg.clone(), Some("https://flag.test/"), None).unwrap();
    assert_eq!(cfg.endpoint_url(), "https://flag.test/api/activities");

    let cfg = resolve_config(env_cfg, None, None).unwrap();
    assert_eq!(cfg.endpoint_url(), "http://env.test/api/activities");
}

#[test]
fn resolve_config_overrides_request_timeout_only() {
    let cfg = resolve_config(ClientConfig::default(), None, Some(5)).unwrap();
    assert_eq!(cfg.timeouts.request_secs, 5);
    assert_eq!(cfg.timeouts.connect_secs, Timeouts::default().connect_secs);

    let cfg = resolve_config(ClientConfig::default(), None, Some(0)).unwrap();
    assert_eq!(cfg.timeouts, Timeouts::default());
}

#[test]
fn resolve_config_rejects_bad_flag_url() {
    assert!(resolve_config(ClientConfig::default(), Some("localhost:8888"), None).is_err());
}

#[test]
fn rendered_errors_are_not_reprinted() {
    assert!(CliError::Invalid(ValidationError::MissingAges).is_rendered());
    assert!(CliError::Submit(SubmitError::EmptyBody).is_rendered());
    assert!(!CliError::Busy.is_rendered());
}

#[test]
fn cli_parses_submit_flags() {
    let cli = Cli::try_parse_from([
        "activities",
        "--base-url",
        "http://planner.test",
        "submit",
        "--num-children",
        "2",
        "--ages",
        "4, 7",
    ])
    .unwrap();
    assert_eq!(cli.base_url.as_deref(), Some("http://planner.test"));
    let Command::Submit(args) = cli.command else {
        panic!("expected submit");
    };
    assert_eq!(args.num_children.as_deref(), Some("2"));
    assert_eq!(args.ages.as_deref(), Some("4, 7"));
}
