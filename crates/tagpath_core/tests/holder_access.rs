use std::cell::Cell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;
use tagpath_core::{
    get, modify_nested, ContainerHolder, MemoryContainer, NamespacedKey, Number, TagPathError,
    TagType, TagValue, TaggedContainer,
};

fn path(values: &[&str]) -> Vec<NamespacedKey> {
    values.iter().map(|value| value.parse().unwrap()).collect()
}

struct Player {
    name: String,
    data: MemoryContainer,
}

impl Player {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            data: MemoryContainer::new(),
        }
    }
}

impl ContainerHolder for Player {
    type Container = MemoryContainer;

    fn container(&self) -> &MemoryContainer {
        &self.data
    }

    fn container_mut(&mut self) -> &mut MemoryContainer {
        &mut self.data
    }
}

#[test]
fn holder_forwards_every_operation_to_its_root() {
    let mut player = Player::new("alex");
    let gold = path(&["eco:wallet", "eco:gold"]);

    player.add_number(40i64, &gold).unwrap();
    player
        .add_number_clamped(100i64, None, Some(120), &gold)
        .unwrap();
    let after_spend = player
        .remove_number_capped(30i64, Some(0), None, &gold)
        .unwrap();

    assert_eq!(player.name, "alex");
    assert_eq!(after_spend, Number::Long(90));
    assert_eq!(
        player.get_nested(TagType::Long, &gold).unwrap(),
        Some(TagValue::Long(90))
    );

    player
        .set_nested(TagValue::String("knight".to_string()), &path(&["rpg:class"]))
        .unwrap();
    player.delete_nested(&gold).unwrap();
    assert_eq!(
        player
            .get_nested_or_default(TagType::Long, TagValue::Long(-1), &gold)
            .unwrap(),
        TagValue::Long(-1)
    );
    assert_eq!(
        get(player.container(), TagType::String, &path(&["rpg:class"])).unwrap(),
        Some(TagValue::String("knight".to_string()))
    );

    let entries = player
        .modify_nested(&path(&["eco:wallet"]), |wallet| Ok(wallet.len()))
        .unwrap();
    assert_eq!(entries, 0);
}

#[derive(Debug, PartialEq)]
struct StoreLocked;

impl Display for StoreLocked {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "store is locked")
    }
}

impl Error for StoreLocked {}

/// Host whose writes fail while a shared lock flag is set.
#[derive(Debug, Clone, PartialEq)]
struct LockableContainer {
    entries: HashMap<String, TagValue<LockableContainer>>,
    locked: Rc<Cell<bool>>,
}

impl LockableContainer {
    fn new(locked: Rc<Cell<bool>>) -> Self {
        Self {
            entries: HashMap::new(),
            locked,
        }
    }
}

impl TaggedContainer for LockableContainer {
    type Key = String;
    type Error = StoreLocked;

    fn has(&self, key: &String, tag: TagType) -> Result<bool, StoreLocked> {
        Ok(self.entries.get(key).is_some_and(|value| value.tag() == tag))
    }

    fn get(&self, key: &String, tag: TagType) -> Result<Option<TagValue<Self>>, StoreLocked> {
        Ok(self
            .entries
            .get(key)
            .filter(|value| value.tag() == tag)
            .cloned())
    }

    fn set(&mut self, key: &String, value: TagValue<Self>) -> Result<(), StoreLocked> {
        if self.locked.get() {
            return Err(StoreLocked);
        }
        self.entries.insert(key.clone(), value);
        Ok(())
    }

    fn remove(&mut self, key: &String) -> Result<(), StoreLocked> {
        if self.locked.get() {
            return Err(StoreLocked);
        }
        self.entries.remove(key);
        Ok(())
    }

    fn new_empty(&self) -> Self {
        Self::new(Rc::clone(&self.locked))
    }
}

fn keys(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn host_write_failure_propagates_unchanged() {
    let locked = Rc::new(Cell::new(true));
    let mut root = LockableContainer::new(Rc::clone(&locked));

    let err = tagpath_core::add(&mut root, 1i32, &keys(&["a", "b"])).unwrap_err();
    assert_eq!(err, TagPathError::Host(StoreLocked));
    assert!(err.source().is_some());

    locked.set(false);
    tagpath_core::add(&mut root, 1i32, &keys(&["a", "b"])).unwrap();
    assert_eq!(
        get(&root, TagType::Int, &keys(&["a", "b"])).unwrap(),
        Some(TagValue::Int(1))
    );
}

#[test]
fn failed_mutation_skips_write_back() {
    let locked = Rc::new(Cell::new(false));
    let mut root = LockableContainer::new(Rc::clone(&locked));

    let err = modify_nested(&mut root, &keys(&["outer", "inner"]), |container| {
        container.set(&"staged".to_string(), TagValue::Int(1))?;
        Err::<(), _>(StoreLocked)
    })
    .unwrap_err();

    assert_eq!(err, TagPathError::Host(StoreLocked));
    assert!(root.entries.is_empty());
}
