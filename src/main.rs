fn main() -> eyre::Result<()> {
    layaway::run()
}
