use light_bitset::{BitSet, BitSetError};

fn main() {
    let mut bitset = BitSet::new(10).unwrap();
    assert_eq!(
        bitset.set(64),
        Err(BitSetError::OutOfRange {
            index: 64,
            capacity: 64,
        })
    );

    let other = BitSet::new(65).unwrap();
    match bitset.is_disjoint(&other) {
        Err(err @ BitSetError::SizeMismatch { .. }) => println!("{err}"),
        result => panic!("unexpected result: {result:?}"),
    }
}
