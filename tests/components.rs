use elgamal_signature::{primality::is_probable_prime, Components, Error, GenerationOptions, ParamSize};
use num_bigint::BigUint;
use num_traits::One;

// Small subgroups keep the safe prime search fast; never use sizes like
// these outside of tests
const TEST_BITS: u32 = 48;

#[test]
fn generated_components_satisfy_invariants() {
    let mut rng = rand::thread_rng();
    let components = Components::generate(&mut rng, ParamSize::new(TEST_BITS).unwrap()).unwrap();

    let (p, q, g) = (components.p(), components.q(), components.g());

    assert!(is_probable_prime(p, 40, &mut rng), "p is not prime");
    assert!(is_probable_prime(q, 40, &mut rng), "q is not prime");
    assert_eq!(*p, (q << 1) + BigUint::one(), "p != 2q + 1");
    assert_eq!(q.bits(), TEST_BITS as usize, "q has the wrong bit-length");

    assert!(*g > BigUint::one(), "g must not be 1");
    assert!(g < p, "g out of range");
    assert!(g.modpow(q, p).is_one(), "g does not have order q");

    assert!(components.is_valid());
}

#[test]
fn subgroup_size_minimum_is_enforced() {
    assert_eq!(ParamSize::new(8), Err(Error::Configuration));
    assert_eq!(ParamSize::new(15), Err(Error::Configuration));
    assert!(ParamSize::new(16).is_ok());
    assert_eq!(ParamSize::new(256).unwrap().bits(), 256);
}

#[test]
fn zero_options_are_rejected() {
    let mut rng = rand::thread_rng();
    let size = ParamSize::new(TEST_BITS).unwrap();

    let no_rounds = GenerationOptions {
        rounds: 0,
        ..Default::default()
    };
    assert_eq!(
        Components::generate_with(&mut rng, size, &no_rounds).unwrap_err(),
        Error::Configuration
    );

    let no_cap = GenerationOptions {
        iteration_cap: 0,
        ..Default::default()
    };
    assert_eq!(
        Components::generate_with(&mut rng, size, &no_cap).unwrap_err(),
        Error::Configuration
    );
}

#[test]
fn exhausted_iteration_cap_times_out() {
    let mut rng = rand::thread_rng();

    // a single candidate at 512 bits is essentially never a safe prime
    let options = GenerationOptions {
        iteration_cap: 1,
        ..Default::default()
    };

    assert_eq!(
        Components::generate_with(&mut rng, ParamSize::new(512).unwrap(), &options).unwrap_err(),
        Error::GenerationTimeout
    );
}

#[test]
fn from_components_accepts_a_known_good_group() {
    // q = 11, p = 23 = 2q + 1; 4 = 2^2 generates the order-11 subgroup
    let components = Components::from_components(
        BigUint::from(23_u8),
        BigUint::from(11_u8),
        BigUint::from(4_u8),
    )
    .unwrap();

    assert!(components.is_valid());
}

#[test]
fn from_components_rejects_broken_parameters() {
    let p = BigUint::from(23_u8);
    let q = BigUint::from(11_u8);

    // p != 2q + 1
    assert_eq!(
        Components::from_components(p.clone(), BigUint::from(7_u8), BigUint::from(4_u8)),
        Err(Error::InvalidParameters)
    );

    // g = 1
    assert_eq!(
        Components::from_components(p.clone(), q.clone(), BigUint::one()),
        Err(Error::InvalidParameters)
    );

    // g >= p
    assert_eq!(
        Components::from_components(p.clone(), q.clone(), BigUint::from(25_u8)),
        Err(Error::InvalidParameters)
    );

    // 5 is outside the order-11 subgroup mod 23 (5^11 = -1 mod 23)
    assert_eq!(
        Components::from_components(p, q, BigUint::from(5_u8)),
        Err(Error::InvalidParameters)
    );
}
