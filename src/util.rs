use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

pub(crate) fn random_id(count: usize) -> String {
    let mut rng = thread_rng();
    std::iter::repeat(())
        .map(|()| rng.sample(Alphanumeric))
        .map(char::from)
        .take(count)
        .collect()
}
