use std::marker::PhantomData;

use static_assertions::assert_type_eq_all;
use vitta::{family, Aggregate};

pub struct Test<T>(PhantomData<T>);
family!(pub TestFamily for Test);

pub struct Other<T>(PhantomData<T>);
family!(pub OtherFamily for Other);

// 1 token
assert_type_eq_all!(Test<(i32,)>, Aggregate![Test; i32], Aggregate![Test; Test<i32>]);

// 2 tokens
assert_type_eq_all!(
    Test<(i32, i32)>,
    Aggregate![Test; i32, i32],
    Aggregate![Test; Test<i32>, i32],
    Aggregate![Test; i32, Test<i32>],
    Aggregate![Test; Test<i32>, Test<i32>],
    Aggregate![Test; Test<i32, i32>],
);

// 3 tokens
assert_type_eq_all!(
    Test<(i32, i32, i32)>,
    Aggregate![Test; i32, i32, i32],
    Aggregate![Test; Test<i32>, i32, i32],
    Aggregate![Test; i32, Test<i32>, i32],
    Aggregate![Test; i32, i32, Test<i32>],
    Aggregate![Test; Test<i32>, Test<i32>, i32],
    Aggregate![Test; Test<i32, i32>, i32],
    Aggregate![Test; Test<i32>, i32, Test<i32>],
    Aggregate![Test; i32, Test<i32>, Test<i32>],
    Aggregate![Test; i32, Test<i32, i32>],
    Aggregate![Test; Test<i32>, Test<i32>, Test<i32>],
    Aggregate![Test; Test<i32, i32>, Test<i32>],
    Aggregate![Test; Test<i32>, Test<i32, i32>],
    Aggregate![Test; Test<i32, i32, i32>],
);

// Order is preserved, and nothing is deduplicated
assert_type_eq_all!(
    Aggregate![Test; u8, Test<u16, u8>, Test<>, u32],
    Test<(u8, u16, u8, u32)>,
);

// Instances of other containers are plain elements
assert_type_eq_all!(
    Aggregate![Test; Other<(u8, u16)>, (u32, u64)],
    Test<(Other<(u8, u16)>, (u32, u64))>,
);
assert_type_eq_all!(
    Aggregate![Test; u8, Aggregate![Other; u16]],
    Test<(u8, Other<(u16,)>)>,
);

// Sugar is rewritten inside plain elements, too
assert_type_eq_all!(
    Aggregate![Test; Option<Test<u8, u16>>],
    Test<(Option<Test<(u8, u16)>>,)>,
);

// Splicing by synonym, and by nested invocation
type Pair = Test<(u8, u16)>;
assert_type_eq_all!(
    Aggregate![Test; ..Pair, Aggregate![Test; u32, Test<u64>]],
    Aggregate![Test; Aggregate![Test; ..Pair, u32], u64],
    Test<(u8, u16, u32, u64)>,
);

mod qualified {
    use static_assertions::assert_type_eq_all;
    use vitta::Aggregate;

    assert_type_eq_all!(
        Aggregate![super::Test; u8, super::Test<u16>],
        super::Test<(u8, u16)>,
    );
}

#[test]
fn family_of_an_instance() {
    use vitta::Instance;
    assert_type_eq_all!(<Test<(u8, u16)> as Instance>::Family, TestFamily);
    assert_type_eq_all!(<Other<()> as Instance>::Family, OtherFamily);
}

// The tuple form is the actual form, and is never rewritten
assert_type_eq_all!(
    Aggregate![Test; Test<(u8, u16)>, u32],
    Aggregate![Test; Test<(u8,)>, Test<()>, Test<(u16, u32)>],
    Test<(u8, u16, u32)>,
);
assert_type_eq_all!(Aggregate![Test; Test<((u8, u16),)>], Test<((u8, u16),)>);
assert_type_eq_all!(Aggregate![Test; Test<(u8, u16), u32>], Test<((u8, u16), u32)>);

mod same_name {
    use std::marker::PhantomData;

    use static_assertions::assert_type_eq_all;
    use vitta::Aggregate;

    pub struct Test<T>(PhantomData<T>);

    // Only a synonym keeps a same-named type from being taken as an instance
    type Local = Test<(u8,)>;

    assert_type_eq_all!(
        Aggregate![super::Test; Local, u16],
        super::Test<(Test<(u8,)>, u16)>,
    );
}
