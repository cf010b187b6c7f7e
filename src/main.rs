fn main() -> anyhow::Result<()> {
    gravity_simulator::start()
}
