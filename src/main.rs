use vena::flags::Flags;
use vena::shell::Shell;
use std::env;

fn main() -> Result<(), vena::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();

    if let Err(e) = flags.parse(&args) {
        eprintln!("{}", e);
        flags.print_usage();
        std::process::exit(1);
    }

    if flags.is_set("version") {
        println!(
            "vena v{}.{}",
            env!("CARGO_PKG_VERSION_MAJOR"),
            env!("CARGO_PKG_VERSION_MINOR")
        );
        return Ok(());
    }

    let mut shell = Shell::new()?;
    shell.run()
}
