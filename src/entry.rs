/// A key-value pair stored at each internal node of a tree.
#[derive(Serialize, Deserialize, Debug)]
pub struct Entry<T, U> {
    pub key: T,
    pub value: U,
}
