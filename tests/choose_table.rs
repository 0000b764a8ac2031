use permdex::{ChooseTable, CodecError};

#[test]
fn pascal_identities() {
    let choose = ChooseTable::<u64>::new(12, 12).unwrap();
    for n in 0..=12usize {
        assert_eq!(1, choose.get(n, 0).unwrap());
        assert_eq!(1, choose.get(n, n).unwrap());
        for m in 1..n {
            assert_eq!(
                choose.get(n - 1, m).unwrap() + choose.get(n - 1, m - 1).unwrap(),
                choose.get(n, m).unwrap()
            );
        }
    }
    assert_eq!(6, choose.get(4, 2).unwrap());
    assert_eq!(4, choose.get(4, 3).unwrap());
    assert_eq!(924, choose.get(12, 6).unwrap());
}

#[test]
fn zero_when_choosing_more_than_available() {
    let choose = ChooseTable::<u64>::new(4, 4).unwrap();
    assert_eq!(0, choose.get(1, 2).unwrap());
    assert_eq!(0, choose.get(3, 4).unwrap());
    assert_eq!(0, choose.get(0, 1).unwrap());
}

#[test]
fn lookups_beyond_the_table_fail() {
    let choose = ChooseTable::<u64>::new(5, 2).unwrap();
    assert_eq!(6, choose.get(4, 2).unwrap());
    assert_eq!(Err(CodecError::OutOfRange), choose.get(4, 3)); // m beyond m_max
    assert_eq!(Err(CodecError::OutOfRange), choose.get(6, 1)); // n beyond n_max
    assert_eq!(0, choose.get(1, 2).unwrap()); // m>n wins over the bound check
}

#[test]
fn narrow_table_rejects_overflowing_coefficients() {
    // C(10,5)=252 still fits in a u8, C(11,5)=462 does not.
    assert!(ChooseTable::<u8>::new(10, 5).is_ok());
    assert_eq!(Err(CodecError::Overflow), ChooseTable::<u8>::new(11, 5));
}

#[test]
fn degenerate_tables() {
    let choose = ChooseTable::<u64>::new(0, 0).unwrap();
    assert_eq!(1, choose.get(0, 0).unwrap());
    let choose = ChooseTable::<u64>::new(6, 0).unwrap();
    assert_eq!(1, choose.get(6, 0).unwrap());
}
