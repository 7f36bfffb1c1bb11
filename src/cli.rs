use crate::color::RGBColor;
use crate::{Arguments, DEFAULT_OUTPUT_DIRECTORY};
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, ArgMatches,
    Arg, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_output_dir_argument(command);
        Self::register_color_argument(command)
    }

    fn register_output_dir_argument(command: Command) -> Command {
        command.arg(Self::create_output_dir_argument())
    }

    fn register_color_argument(command: Command) -> Command {
        command.arg(Self::create_color_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_output_dir_argument() -> Arg {
        arg!(output_dir: -o --output_dir <DIR> "Directory receiving the icon set")
            .default_value(DEFAULT_OUTPUT_DIRECTORY)
            .value_parser(value_parser!(PathBuf))
    }

    fn create_color_argument() -> Arg {
        arg!(color: -c --color <COLOR> "Fill color as #RRGGBB or R,G,B")
            .default_value(RGBColor::default().to_string())
            .value_parser(value_parser!(RGBColor))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            output_dir: Self::extract_output_dir_argument(matches),
            color: Self::extract_color_argument(matches),
        }
    }

    fn extract_output_dir_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_dir")
            .expect("Output directory must be provided, but was unset.")
            .clone()
    }

    fn extract_color_argument(matches: &ArgMatches) -> RGBColor {
        matches
            .get_one::<RGBColor>("color")
            .expect("Color must be provided, but was unset.")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{error::ErrorKind, Command};

    use super::{CLIParser, RGBColor};

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_output_dir_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_output_dir_argument(command);
        let matches =
            command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--output_dir", "app/icons"]);
        let output_dir = CLIParser::extract_output_dir_argument(&matches);
        assert_eq!(output_dir, Path::new("app/icons"));
    }

    #[test]
    fn parse_hex_color_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_color_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-c", "#FF8000"]);
        let color = CLIParser::extract_color_argument(&matches);
        assert_eq!(color, RGBColor::new(255, 128, 0));
    }

    #[test]
    fn parse_decimal_color_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_color_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--color", "1,2,3"]);
        let color = CLIParser::extract_color_argument(&matches);
        assert_eq!(color, RGBColor::new(1, 2, 3));
    }

    #[test]
    fn parse_color_illegal_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_color_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--color", "blue"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::ValueValidation);
        } else {
            panic!("Illegal value for color not detected");
        }
    }

    #[test]
    fn parse_without_arguments_uses_defaults() {
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT]);
        assert_eq!(
            arguments.output_dir,
            Path::new("src-tauri/icons"),
            "output directory does not match"
        );
        assert_eq!(
            arguments.color,
            RGBColor::new(88, 166, 255),
            "color does not match"
        );
    }
}
