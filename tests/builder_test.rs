use gentree::builder::{Shape, TreeBuilder};
use gentree::errors::TreeError;
use gentree::{count_iterative, depth_iterative};
use rstest::rstest;

#[rstest]
#[case(Shape::Example, 9, 9, 4, 3)]
#[case(Shape::Chain, 6, 0, 6, 6)]
#[case(Shape::Fan, 6, 0, 7, 2)]
#[case(Shape::Complete, 4, 2, 15, 4)]
#[case(Shape::Complete, 1, 5, 1, 1)]
fn given_shape_when_building_then_size_and_depth_match(
    #[case] shape: Shape,
    #[case] size: usize,
    #[case] branching: usize,
    #[case] count: usize,
    #[case] depth: usize,
) {
    let tree = TreeBuilder::new(shape)
        .size(size)
        .branching(branching)
        .build()
        .expect("within limits");
    assert_eq!(count_iterative(tree.as_ref()), count);
    assert_eq!(depth_iterative(tree.as_ref()), depth);
}

#[rstest]
#[case(Shape::Chain)]
#[case(Shape::Complete)]
fn given_size_zero_when_building_then_absent_tree(#[case] shape: Shape) {
    let tree = TreeBuilder::new(shape).size(0).build().unwrap();
    assert!(tree.is_none());
}

#[rstest]
fn given_limit_below_size_when_building_then_too_large() {
    let result = TreeBuilder::new(Shape::Fan).size(10).max_nodes(10).build();
    match result {
        Err(TreeError::TooLarge { requested, limit }) => {
            assert_eq!(requested, 11);
            assert_eq!(limit, 10);
        }
        other => panic!("expected TooLarge, got {:?}", other),
    }
}

#[rstest]
fn given_limit_equal_to_size_when_building_then_ok() {
    let tree = TreeBuilder::new(Shape::Complete)
        .size(3)
        .branching(2)
        .max_nodes(7)
        .build()
        .unwrap();
    assert_eq!(count_iterative(tree.as_ref()), 7);
}

#[rstest]
fn given_default_builder_then_example_tree() {
    let builder = TreeBuilder::default();
    assert_eq!(builder.planned_nodes(), Some(4));
    let tree = builder.build().unwrap().unwrap();
    assert_eq!(*tree.value(), 10);
}
