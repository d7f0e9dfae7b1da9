#[cfg(test)]
mod tests {
    use crate::cli::validation::{parse_bool, parse_request_path};
    use crate::cli::{Cli, Command, OutputFormat};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("YES"), Ok(true));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("off"), Ok(false));
        assert_eq!(parse_bool("0"), Ok(false));
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn test_parse_request_path() {
        assert_eq!(
            parse_request_path("/gxyundata/list"),
            Ok("/gxyundata/list".to_string())
        );
        assert!(parse_request_path("").is_err());
        assert!(parse_request_path("gxyundata").is_err());
    }

    #[test]
    fn test_resolve_defaults() {
        let cli = Cli::try_parse_from(["kiln", "resolve"]).unwrap();
        match cli.command {
            Command::Resolve(args) => {
                assert_eq!(args.config.root, PathBuf::from("."));
                assert!(args.config.config.is_none());
                assert!(args.config.profile.is_none());
                assert!(!args.signals.production);
                assert!(!args.signals.development);
                assert!(args.signals.cdn_local.is_none());
                assert_eq!(args.format, OutputFormat::Json);
                assert!(!args.compact);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_resolve_with_signal_overrides() {
        let cli = Cli::try_parse_from([
            "kiln",
            "resolve",
            "--production",
            "--cdn-local",
            "false",
            "--platform",
            "darwin",
            "--cpus",
            "8",
            "--format",
            "toml",
        ])
        .unwrap();
        match cli.command {
            Command::Resolve(args) => {
                assert!(args.signals.production);
                assert_eq!(args.signals.cdn_local, Some(false));
                assert_eq!(args.signals.platform.as_deref(), Some("darwin"));
                assert_eq!(args.signals.cpus, Some(8));
                assert_eq!(args.format, OutputFormat::Toml);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_production_conflicts_with_development() {
        let result = Cli::try_parse_from(["kiln", "resolve", "--production", "--development"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_cpus_rejected() {
        assert!(Cli::try_parse_from(["kiln", "resolve", "--cpus", "0"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["kiln", "-v", "-q", "check"]).is_err());
    }

    #[test]
    fn test_route_requires_absolute_path() {
        assert!(Cli::try_parse_from(["kiln", "route", "api/users"]).is_err());

        let cli = Cli::try_parse_from(["kiln", "route", "/gxyundata/a", "--root", "site"]).unwrap();
        assert_eq!(cli.command.config_args().root, PathBuf::from("site"));
    }

    #[test]
    fn test_check_flags() {
        let cli = Cli::try_parse_from(["kiln", "check", "--fs", "-p", "staging"]).unwrap();
        match cli.command {
            Command::Check(args) => {
                assert!(args.fs);
                assert_eq!(args.config.profile.as_deref(), Some("staging"));
            }
            _ => panic!("Expected Check command"),
        }
    }
}
