/// A path into a semi-structured value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JsonPath {
    pub segments: Vec<PathSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// An object key
    Key(String),

    /// An array index
    Index(i64),
}

impl JsonPath {
    pub fn new() -> JsonPath {
        JsonPath::default()
    }

    /// Builds a path from key transforms, treating every transform that
    /// parses as an integer as an array index.
    pub fn from_transforms<I, S>(transforms: I) -> JsonPath
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments = transforms
            .into_iter()
            .map(|transform| {
                let transform = transform.as_ref();
                match transform.parse::<i64>() {
                    Ok(index) => PathSegment::Index(index),
                    Err(_) => PathSegment::Key(transform.to_string()),
                }
            })
            .collect();

        JsonPath { segments }
    }

    pub fn key(mut self, key: impl Into<String>) -> JsonPath {
        self.segments.push(PathSegment::Key(key.into()));
        self
    }

    pub fn index(mut self, index: i64) -> JsonPath {
        self.segments.push(PathSegment::Index(index));
        self
    }

    /// Append the segments of `other` to this path.
    pub fn join(&self, other: &JsonPath) -> JsonPath {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        JsonPath { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl From<&str> for JsonPath {
    fn from(value: &str) -> Self {
        JsonPath::from_transforms([value])
    }
}

impl From<PathSegment> for JsonPath {
    fn from(value: PathSegment) -> Self {
        JsonPath {
            segments: vec![value],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_transforms_are_indices() {
        let path = JsonPath::from_transforms(["owner", "0", "name", "-1"]);
        assert_eq!(
            path.segments,
            vec![
                PathSegment::Key("owner".to_string()),
                PathSegment::Index(0),
                PathSegment::Key("name".to_string()),
                PathSegment::Index(-1),
            ]
        );
    }

    #[test]
    fn join_preserves_order() {
        let lhs = JsonPath::new().key("a").index(1);
        let rhs = JsonPath::new().key("b");
        let joined = lhs.join(&rhs);
        assert_eq!(joined.len(), 3);
        assert_eq!(joined.segments[2], PathSegment::Key("b".to_string()));
    }
}
