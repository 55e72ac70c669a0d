// likeness-value - Class descriptors and object instances
// Copyright (c) 2026 Likeness contributors. MIT licensed.

//! Class descriptors and object instances.
//!
//! There is no ambient reflection to lean on, so structured types are
//! described explicitly: a [`ClassDef`] lists the fields a class declares
//! (with visibility and static-ness) and links to its parent class, and an
//! [`ObjectInstance`] holds one value slot per *qualified* field.
//!
//! # Qualified fields
//!
//! A qualified field name is `DeclaringClass::field`. Same-named fields
//! declared at different levels of a lineage are independent slots: a class
//! re-declaring a private field its parent also declares holds two values,
//! one per declaring level, and both participate in comparison.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::comparable::EqualityComparable;
use crate::container::Container;
use crate::error::{Error, Result};
use crate::value::Value;

/// Declared visibility of a field.
///
/// Visibility never affects comparison: private fields participate exactly
/// like public ones. It is carried so descriptors can mirror the shape of
/// the types they describe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// A single field declaration on a class.
#[derive(Clone, Debug)]
pub struct FieldDef {
    name: Rc<str>,
    visibility: Visibility,
    is_static: bool,
}

impl FieldDef {
    /// Declare an instance field.
    pub fn new(name: &str, visibility: Visibility) -> Self {
        FieldDef {
            name: Rc::from(name),
            visibility,
            is_static: false,
        }
    }

    /// Declare a static (class-level) field.
    ///
    /// Static fields are excluded from instance slots and from comparison.
    pub fn new_static(name: &str, visibility: Visibility) -> Self {
        FieldDef {
            name: Rc::from(name),
            visibility,
            is_static: true,
        }
    }

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the declared visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Check if this is a static field.
    pub fn is_static(&self) -> bool {
        self.is_static
    }
}

/// Descriptor for a declared class: name, parent link, field declarations,
/// and an optional custom comparison capability.
pub struct ClassDef {
    name: Rc<str>,
    parent: Option<Rc<ClassDef>>,
    fields: Vec<FieldDef>,
    hook: Option<Rc<dyn EqualityComparable>>,
}

impl ClassDef {
    /// Create a new root class with no parent.
    pub fn new(name: &str) -> Self {
        ClassDef {
            name: Rc::from(name),
            parent: None,
            fields: Vec::new(),
            hook: None,
        }
    }

    /// Create a new class extending `parent`.
    pub fn with_parent(name: &str, parent: Rc<ClassDef>) -> Self {
        ClassDef {
            name: Rc::from(name),
            parent: Some(parent),
            fields: Vec::new(),
            hook: None,
        }
    }

    /// Declare a field on this class.
    ///
    /// Declaration order is preserved; it determines the enumeration order
    /// of [`ObjectInstance::properties`]. Re-declaring a field name already
    /// declared *on this class* is an error; re-declaring a name a parent
    /// class declares is fine (the slots stay distinct).
    pub fn add_field(&mut self, field: FieldDef) -> Result<()> {
        if self.fields.iter().any(|f| f.name() == field.name()) {
            return Err(Error::duplicate_field(&*self.name, field.name()));
        }
        self.fields.push(field);
        Ok(())
    }

    /// Attach a custom comparison capability to this class.
    pub fn set_hook(&mut self, hook: Rc<dyn EqualityComparable>) {
        self.hook = Some(hook);
    }

    /// Get the class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the parent class, if any.
    pub fn parent(&self) -> Option<&Rc<ClassDef>> {
        self.parent.as_ref()
    }

    /// Get the fields declared directly on this class.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Get the custom comparison capability, if any.
    ///
    /// Inherited: a subclass of a class carrying the capability carries it
    /// too. The most-derived declaration in the lineage wins.
    pub fn hook(&self) -> Option<&Rc<dyn EqualityComparable>> {
        self.lineage().find_map(|class| class.hook.as_ref())
    }

    /// Walk the lineage from this class up through every ancestor.
    pub fn lineage(&self) -> impl Iterator<Item = &ClassDef> {
        std::iter::successors(Some(self), |class| class.parent.as_deref())
    }

    /// Check whether two descriptors denote the identical declared type.
    ///
    /// Exact match only; a subclass is never the same type as its parent.
    pub fn same_class(&self, other: &ClassDef) -> bool {
        std::ptr::eq(self, other) || self.name == other.name
    }

    /// The qualified name of a field declared on this class.
    pub fn qualified(&self, field: &str) -> String {
        format!("{}::{}", self.name, field)
    }
}

impl fmt::Display for ClassDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for ClassDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<class {}>", self.name)
    }
}

/// An instance of a declared class.
///
/// Slots are keyed by qualified field name and created eagerly (initialised
/// to nil) for every instance field anywhere in the lineage. Slot values sit
/// behind a `RefCell` so cyclic graphs can be wired up after construction;
/// the comparison engine only ever reads them.
pub struct ObjectInstance {
    class: Rc<ClassDef>,
    slots: RefCell<HashMap<String, Value>>,
}

impl ObjectInstance {
    /// Create a new instance of `class` with every instance slot set to nil.
    pub fn new(class: Rc<ClassDef>) -> Rc<Self> {
        let mut slots = HashMap::new();
        for level in class.lineage() {
            for field in level.fields().iter().filter(|f| !f.is_static()) {
                slots.insert(level.qualified(field.name()), Value::Nil);
            }
        }
        Rc::new(ObjectInstance {
            class: Rc::clone(&class),
            slots: RefCell::new(slots),
        })
    }

    /// Get the class descriptor of this instance.
    pub fn class(&self) -> &Rc<ClassDef> {
        &self.class
    }

    /// Assign a field by bare name, resolving to its most-derived
    /// declaration in the lineage.
    pub fn set(&self, field: &str, value: Value) -> Result<()> {
        let level = self.declaring_class(field)?;
        let key = level.qualified(field);
        self.slots.borrow_mut().insert(key, value);
        Ok(())
    }

    /// Assign the field declared at an exact lineage level.
    ///
    /// Needed when a lineage declares the same field name at several levels
    /// and `set` would only reach the most-derived one.
    pub fn set_declared(&self, class: &str, field: &str, value: Value) -> Result<()> {
        let level = self.lineage_level(class)?;
        let declared = level
            .fields()
            .iter()
            .find(|f| f.name() == field)
            .ok_or_else(|| Error::unknown_field(class, field))?;
        if declared.is_static() {
            return Err(Error::static_field(class, field));
        }
        let key = level.qualified(field);
        self.slots.borrow_mut().insert(key, value);
        Ok(())
    }

    /// Read a field by bare name, resolving to its most-derived declaration.
    pub fn get(&self, field: &str) -> Result<Value> {
        let level = self.declaring_class(field)?;
        let key = level.qualified(field);
        Ok(self
            .slots
            .borrow()
            .get(&key)
            .cloned()
            .unwrap_or(Value::Nil))
    }

    /// Read the field declared at an exact lineage level.
    pub fn get_declared(&self, class: &str, field: &str) -> Result<Value> {
        let level = self.lineage_level(class)?;
        let declared = level
            .fields()
            .iter()
            .find(|f| f.name() == field)
            .ok_or_else(|| Error::unknown_field(class, field))?;
        if declared.is_static() {
            return Err(Error::static_field(class, field));
        }
        let key = level.qualified(field);
        Ok(self
            .slots
            .borrow()
            .get(&key)
            .cloned()
            .unwrap_or(Value::Nil))
    }

    /// Enumerate the full qualified-field mapping of this instance.
    ///
    /// Walks the lineage from the most-derived class upward, emitting each
    /// level's instance fields in declaration order under their qualified
    /// names. Static fields are excluded; visibility is ignored. This is a
    /// pure read with no user-visible side effects.
    pub fn properties(&self) -> Container {
        let slots = self.slots.borrow();
        let mut properties = Container::new();
        for level in self.class.lineage() {
            for field in level.fields().iter().filter(|f| !f.is_static()) {
                let key = level.qualified(field.name());
                let value = slots.get(&key).cloned().unwrap_or(Value::Nil);
                properties.insert(key.as_str(), value);
            }
        }
        properties
    }

    /// Find the most-derived lineage level declaring `field` as an instance
    /// field.
    fn declaring_class(&self, field: &str) -> Result<&ClassDef> {
        let mut found_static = false;
        for level in self.class.lineage() {
            if let Some(declared) = level.fields().iter().find(|f| f.name() == field) {
                if declared.is_static() {
                    found_static = true;
                    continue;
                }
                return Ok(level);
            }
        }
        if found_static {
            Err(Error::static_field(self.class.name(), field))
        } else {
            Err(Error::unknown_field(self.class.name(), field))
        }
    }

    /// Find the lineage level with the given class name.
    fn lineage_level(&self, class: &str) -> Result<&ClassDef> {
        self.class
            .lineage()
            .find(|level| level.name() == class)
            .ok_or_else(|| Error::unknown_class(class))
    }
}

impl fmt::Display for ObjectInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Opaque on purpose: the field graph may contain this instance.
        write!(f, "#<{}>", self.class.name())
    }
}

impl fmt::Debug for ObjectInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<{}>", self.class.name())
    }
}
