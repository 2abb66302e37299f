fn main() {
    #[cfg(feature = "cli")]
    ggpatch::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("ggpatch: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
