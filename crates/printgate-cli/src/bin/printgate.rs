fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let out = printgate_cli::run_demo(&args);
    if !out.stdout.is_empty() {
        print!("{}", out.stdout);
    }
    if !out.stderr.is_empty() {
        eprint!("{}", out.stderr);
    }
    std::process::exit(out.exit_code);
}
