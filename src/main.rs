fn main() {
    koolbuilder::app::cli::run();
}
