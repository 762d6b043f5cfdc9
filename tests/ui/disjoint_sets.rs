use light_bitset::{BitSet, BitSetError};

fn main() -> Result<(), BitSetError> {
    let mut first = BitSet::new(100)?;
    first.fill(&[1, 2, 3, 4, 5, 6, 7, 8, 9])?;

    let mut second = BitSet::new(100)?;
    second.fill(&[10, 11, 12])?;
    assert!(first.is_disjoint(&second)?);

    second.set(9)?;
    assert!(first.not_disjoint(&second)?);
    println!("{first:?}");
    Ok(())
}
