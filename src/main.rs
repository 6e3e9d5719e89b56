fn main() {
    medicate_lib::run()
}
