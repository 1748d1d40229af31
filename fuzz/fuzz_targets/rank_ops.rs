#![no_main]
use lehmer::{factorial, Ranker, Strategy, MAX_RANK_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    let values: Vec<usize> = data.iter().map(|&b| b as usize).collect();
    let n = values.len();

    let implicit = Ranker::new().with_strategy(Strategy::Implicit);
    let fenwick = Ranker::new().with_strategy(Strategy::Fenwick);

    let code = implicit.lehmer_code(&values);
    assert_eq!(code, fenwick.lehmer_code(&values));

    let rank = implicit.rank(&values);
    assert_eq!(rank, fenwick.rank(&values));

    match (code, rank) {
        (Ok(code), Ok(rank)) => {
            assert!(n <= MAX_RANK_LEN);
            assert!(rank < factorial(n).unwrap());
            let expected: u128 = code
                .iter()
                .enumerate()
                .map(|(i, &d)| d as u128 * factorial(n - 1 - i).unwrap())
                .sum();
            assert_eq!(rank, expected);
        }
        (Ok(_), Err(e)) => assert!(n > MAX_RANK_LEN, "valid permutation rejected: {e}"),
        (Err(_), Ok(_)) => panic!("malformed permutation ranked"),
        (Err(a), Err(b)) => assert!(a.is_invalid_input() && b.is_invalid_input()),
    }
});
