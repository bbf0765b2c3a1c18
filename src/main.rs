fn main() -> Result<(), Box<dyn std::error::Error>> {
    omnidev::cli::main()
}
