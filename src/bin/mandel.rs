use mandint::backend::Float;

fn main() -> Result<(), mandint::Error> {
    env_logger::init();

    mandint::run::<Float>()
}
