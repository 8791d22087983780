/// # prompt: Reading Visible and Hidden Input
///
/// This example asks for some text, echoes it back, and then does the same
/// for hidden text. Run it with `RUST_LOG=prettyterm=debug` to see the
/// library's diagnostic events on standard error.
use prettyterm::err::{report, Error};
use prettyterm::{Style, Terminal};
use tracing_subscriber::EnvFilter;

fn run() -> Result<(), Error> {
    let term = Terminal::open();
    let styles = term.styles();

    let text = term.prompt(format_args!(
        "{}Enter sample text:{} ",
        &styles[Style::B],
        &styles[Style::X]
    ));
    println!("You entered: {}", text);

    let secret = term.prompt_hidden(format_args!(
        "{}Enter sample hidden text:{} ",
        &styles[Style::B],
        &styles[Style::X]
    ))?;
    println!();
    println!("You entered while hidden: {}", secret);

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run() {
        report(&error);
        std::process::exit(1);
    }
}
