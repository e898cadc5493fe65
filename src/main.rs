fn main() {
    guestlogin::cli::run();
}
