//! # CLI Integration Tests
//!
//! Argument parsing, default-command behaviour, and the merge of command
//! line, environment and configuration file into a print job.

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::path::PathBuf;
    use std::sync::Mutex;

    use crate::cli::{Cli, Commands, InfoFormat, PrintArgs, load_config};
    use crate::input::{DEFAULT_INPUT, DEFAULT_VARIABLE, PrintConfig};

    // Environment variables are process-wide; tests touching them run one at a time
    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    const PRINT_ENV_VARS: [&str; 4] = [
        "NC2TEXT_INPUT",
        "NC2TEXT_VARIABLE",
        "NC2TEXT_PRECISION",
        "NC2TEXT_MAX_ROWS",
    ];

    /// Test help output mentions what the tool does
    #[test]
    fn test_cli_help() {
        let result = Cli::try_parse_from(["nc2text", "--help"]);
        assert!(result.is_err());

        let error = result.unwrap_err();
        assert!(error.to_string().contains("--max-rows"));
    }

    /// Test that no arguments prints kx from the default path
    #[test]
    fn test_no_arguments_prints_defaults() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        let cli = Cli::try_parse_from(["nc2text"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);

        let job = cli.print.resolve(None);
        assert_eq!(job.input, DEFAULT_INPUT);
        assert_eq!(job.variable, DEFAULT_VARIABLE);
        assert!(job.options.precision.is_none());
        assert!(job.options.max_rows.is_none());
    }

    /// Test print options without a subcommand
    #[test]
    fn test_top_level_print_arguments() {
        let cli = Cli::parse_from([
            "nc2text",
            "data.nc",
            "-n",
            "temperature",
            "--precision",
            "2",
            "--max-rows",
            "1",
        ]);

        assert!(cli.command.is_none());
        assert_eq!(cli.print.file, Some("data.nc".to_string()));
        assert_eq!(cli.print.variable, Some("temperature".to_string()));
        assert_eq!(cli.print.precision, Some(2));
        assert_eq!(cli.print.max_rows, Some(1));
    }

    /// Test explicit print subcommand
    #[test]
    fn test_print_command() {
        let cli = Cli::parse_from(["nc2text", "--verbose", "print", "input.nc", "-n", "kx"]);

        assert!(cli.verbose);
        if let Some(Commands::Print(args)) = &cli.command {
            assert_eq!(args.file, Some("input.nc".to_string()));
            assert_eq!(args.variable, Some("kx".to_string()));
        } else {
            panic!("Expected Print command");
        }
    }

    /// Test info command parsing
    #[test]
    fn test_info_command() {
        let cli = Cli::parse_from([
            "nc2text",
            "info",
            "test.nc",
            "--detailed",
            "-n",
            "kx",
            "--format",
            "json",
        ]);

        if let Some(Commands::Info {
            file,
            detailed,
            variable,
            format,
        }) = &cli.command
        {
            assert_eq!(file, "test.nc");
            assert!(detailed);
            assert_eq!(variable, &Some("kx".to_string()));
            assert_eq!(format, &InfoFormat::Json);
        } else {
            panic!("Expected Info command");
        }
    }

    /// Test info defaults to human output
    #[test]
    fn test_info_default_format() {
        let cli = Cli::parse_from(["nc2text", "info", "test.nc"]);
        if let Some(Commands::Info { format, .. }) = &cli.command {
            assert_eq!(format, &InfoFormat::Human);
        } else {
            panic!("Expected Info command");
        }
    }

    /// Test completions command parsing
    #[test]
    fn test_completions_command() {
        let cli = Cli::parse_from(["nc2text", "completions", "zsh", "-o", "_nc2text"]);
        if let Some(Commands::Completions { shell, output }) = &cli.command {
            assert_eq!(*shell, clap_complete::Shell::Zsh);
            assert_eq!(output, &Some(PathBuf::from("_nc2text")));
        } else {
            panic!("Expected Completions command");
        }
    }

    /// Test verbose and quiet are mutually exclusive
    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["nc2text", "--verbose", "--quiet"]).is_err());
    }

    /// Test invalid numeric options are rejected
    #[test]
    fn test_invalid_precision() {
        assert!(Cli::try_parse_from(["nc2text", "--precision", "two"]).is_err());
        assert!(Cli::try_parse_from(["nc2text", "--max-rows", "-1"]).is_err());
    }

    /// Test the global config flag
    #[test]
    fn test_config_flag() {
        let cli = Cli::parse_from(["nc2text", "--config", "/path/to/job.yaml", "info", "x.nc"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/job.yaml")));
    }

    /// Test command line wins over config file, config wins over defaults
    #[test]
    fn test_resolve_priority() {
        let args = PrintArgs {
            file: None,
            variable: Some("ky".to_string()),
            precision: None,
            max_rows: Some(5),
        };
        let config = PrintConfig {
            input: Some("from_config.nc".to_string()),
            variable: Some("kz".to_string()),
            precision: Some(3),
            max_rows: Some(50),
        };

        let job = args.resolve(Some(config));
        assert_eq!(job.input, "from_config.nc");
        assert_eq!(job.variable, "ky");
        assert_eq!(job.options.precision, Some(3));
        assert_eq!(job.options.max_rows, Some(5));
    }

    /// Test loading the config file named on the command line
    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.json");
        std::fs::write(&path, r#"{ "input": "cfg.nc" }"#).unwrap();

        let config = load_config(Some(path.as_path())).unwrap().unwrap();
        assert_eq!(config.input.as_deref(), Some("cfg.nc"));
        assert!(load_config(None).unwrap().is_none());
        assert!(load_config(Some(dir.path().join("missing.json").as_path())).is_err());
    }

    /// Test environment variables sit between command line and config file
    #[test]
    fn test_environment_variables() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();

        use std::env;

        let original: Vec<Option<String>> =
            PRINT_ENV_VARS.iter().map(|name| env::var(name).ok()).collect();

        unsafe {
            env::set_var("NC2TEXT_INPUT", "/env/input.nc");
            env::set_var("NC2TEXT_VARIABLE", "env_var");
            env::set_var("NC2TEXT_PRECISION", "4");
            env::remove_var("NC2TEXT_MAX_ROWS");
        }

        let cli = Cli::parse_from(["nc2text", "-n", "cli_var"]);
        let config = PrintConfig {
            input: Some("config.nc".to_string()),
            max_rows: Some(7),
            ..PrintConfig::default()
        };
        let job = cli.print.resolve(Some(config));

        assert_eq!(job.input, "/env/input.nc");
        assert_eq!(job.variable, "cli_var");
        assert_eq!(job.options.precision, Some(4));
        assert_eq!(job.options.max_rows, Some(7));

        // Restore original state
        unsafe {
            for (name, value) in PRINT_ENV_VARS.iter().zip(original) {
                match value {
                    Some(value) => env::set_var(name, value),
                    None => env::remove_var(name),
                }
            }
        }
    }
}
