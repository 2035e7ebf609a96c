#[cfg(test)]
mod tests {
    use crate::cli::validation::parse_env_pair;
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_env_pair_valid() {
        assert_eq!(
            parse_env_pair("NODE_ENV=prod"),
            Ok(("NODE_ENV".to_string(), "prod".to_string()))
        );
        assert_eq!(
            parse_env_pair("NODE_ENV="),
            Ok(("NODE_ENV".to_string(), String::new()))
        );
        assert_eq!(
            parse_env_pair("QUERY=a=b"),
            Ok(("QUERY".to_string(), "a=b".to_string()))
        );
    }

    #[test]
    fn test_parse_env_pair_invalid() {
        assert!(parse_env_pair("NODE_ENV").is_err());
        assert!(parse_env_pair("=prod").is_err());
        assert!(parse_env_pair("NODE ENV=prod").is_err());
    }

    #[test]
    fn test_resolve_collects_env_flags() {
        let cli = Cli::parse_from([
            "bundleplan",
            "resolve",
            "--env",
            "NODE_ENV=prod",
            "-e",
            "API_URL=http://localhost",
            "--root",
            "/srv/app",
        ]);
        let Command::Resolve(args) = cli.command else {
            panic!("expected resolve command");
        };
        assert_eq!(args.plan.env.len(), 2);
        assert_eq!(args.plan.env[0], ("NODE_ENV".to_string(), "prod".to_string()));
        assert_eq!(args.plan.root, Some(PathBuf::from("/srv/app")));
        assert!(!args.compact);
    }

    #[test]
    fn test_check_fs_flag() {
        let cli = Cli::parse_from(["bundleplan", "check", "--fs"]);
        let Command::Check(args) = cli.command else {
            panic!("expected check command");
        };
        assert!(args.fs);
        assert!(args.plan.env.is_empty());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["bundleplan", "schema", "--quiet", "--no-color"]);
        assert!(cli.quiet);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::Schema));
    }

    #[test]
    fn test_no_banner_is_global() {
        let cli = Cli::parse_from(["bundleplan", "resolve", "-q", "--no-banner"]);
        assert!(cli.quiet);
        assert!(cli.no_banner);
        assert!(!Cli::parse_from(["bundleplan", "resolve"]).no_banner);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["bundleplan", "-v", "-q", "schema"]).is_err());
    }

    #[test]
    fn test_bad_env_pair_rejected_by_parser() {
        assert!(Cli::try_parse_from(["bundleplan", "resolve", "--env", "prod"]).is_err());
    }
}
