//! A mock [`Vertex`] and the forest fixture shared by the test suite.

use hotstuff_forest::forest::LeveledForest;
use hotstuff_forest::types::{Level, Vertex, VertexID};

/// A vertex identified by a short human-readable name.
///
/// Vertices created with [`TestVertex::root`] do not know their parent, and panic if the forest asks for
/// it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TestVertex {
    pub(crate) name: String,
    level: Level,
    parent: Option<(VertexID, Level)>,
}

impl TestVertex {
    pub(crate) fn new(name: &str, level: u64, parent_name: &str, parent_level: u64) -> TestVertex {
        TestVertex {
            name: name.to_string(),
            level: Level::new(level),
            parent: Some((id_of(parent_name), Level::new(parent_level))),
        }
    }

    pub(crate) fn root(name: &str, level: u64) -> TestVertex {
        TestVertex {
            name: name.to_string(),
            level: Level::new(level),
            parent: None,
        }
    }
}

impl Vertex for TestVertex {
    fn id(&self) -> VertexID {
        id_of(&self.name)
    }

    fn level(&self) -> Level {
        self.level
    }

    fn parent(&self) -> (VertexID, Level) {
        match self.parent {
            Some(parent) => parent,
            None => panic!("parent() should not have been called on {}", self.name),
        }
    }
}

/// Get the id of the vertex named `name`: the bytes of `name`, zero-padded to 32 bytes.
pub(crate) fn id_of(name: &str) -> VertexID {
    let mut bytes = [0u8; 32];
    let len = name.len().min(32);
    bytes[..len].copy_from_slice(&name.as_bytes()[..len]);
    VertexID::new(bytes)
}

/// The fixture:
///
/// ```text
/// level:   0          1   2   3          4          5     6
///          Genesis -- B - C - D
///                  \--------- A
///                                        Missing1 - W
///                                                   Missing2 - X -- Y
///                                                                \- Z
/// ```
///
/// `Genesis`, `Missing1` and `Missing2` are only referenced, never added.
pub(crate) fn test_vertices() -> Vec<TestVertex> {
    vec![
        TestVertex::new("A", 3, "Genesis", 0),
        TestVertex::new("B", 1, "Genesis", 0),
        TestVertex::new("C", 2, "B", 1),
        TestVertex::new("D", 3, "C", 2),
        TestVertex::new("W", 4, "Missing1", 3),
        TestVertex::new("X", 5, "Missing2", 4),
        TestVertex::new("Y", 6, "X", 5),
        TestVertex::new("Z", 6, "X", 5),
    ]
}

pub(crate) fn test_vertex(name: &str) -> TestVertex {
    test_vertices()
        .into_iter()
        .find(|vertex| vertex.name == name)
        .unwrap()
}

/// Verify and add every vertex in `vertices`, in order.
pub(crate) fn populate(forest: &mut LeveledForest<TestVertex>, vertices: Vec<TestVertex>) {
    for vertex in vertices {
        if let Err(err) = forest.verify_vertex(&vertex) {
            panic!("fixture vertex {} failed verification: {}", vertex.name, err);
        }
        forest.add_vertex(vertex);
    }
}

pub(crate) fn populated_forest() -> LeveledForest<TestVertex> {
    let mut forest = LeveledForest::new();
    populate(&mut forest, test_vertices());
    forest
}

/// Sorted names of the vertices yielded by `vertices`.
pub(crate) fn names<'a>(vertices: impl Iterator<Item = &'a TestVertex>) -> Vec<String> {
    let mut names: Vec<String> = vertices.map(|vertex| vertex.name.clone()).collect();
    names.sort();
    names
}
