fn main() {
    if let Err(err) = treemap_layout::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
