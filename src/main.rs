use mandint::backend::FixedPoint;

fn main() -> Result<(), mandint::Error> {
    env_logger::init();

    mandint::run::<FixedPoint>()
}
