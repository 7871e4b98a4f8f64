/*! In-memory accessibility tree for tests.

Every attribute read and action is recorded in a log shared by all nodes
of one [`FakeTree`], so tests can assert what the core touched.
*/

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::a11y::{Action, Attribute, AxErrorCode};
use crate::platform::{ElementRef, RawValue};

/// One interaction with a fake node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
  Read(String, Attribute),
  Perform(String, Action),
}

type Log = Rc<RefCell<Vec<Call>>>;

/// Factory for nodes sharing one call log.
#[derive(Debug, Default)]
pub(crate) struct FakeTree {
  log: Log,
}

impl FakeTree {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Node with an optional title and optional children.
  pub(crate) fn node(
    &self,
    name: &str,
    title: Option<&str>,
    children: Option<Vec<FakeNode>>,
  ) -> FakeNode {
    let node = FakeNode(Rc::new(FakeInner {
      name: name.to_string(),
      attributes: RefCell::new(HashMap::new()),
      faults: RefCell::new(HashMap::new()),
      action_fault: RefCell::new(None),
      log: Rc::clone(&self.log),
    }));
    if let Some(title) = title {
      node.set(Attribute::Title, RawValue::String(title.to_string()));
    }
    if let Some(children) = children {
      node.set(Attribute::Children, RawValue::Elements(children));
    }
    node
  }

  /// Titled node with children.
  pub(crate) fn menu(&self, name: &str, title: &str, children: Vec<FakeNode>) -> FakeNode {
    self.node(name, Some(title), Some(children))
  }

  /// Untitled grouping node with children.
  pub(crate) fn group(&self, name: &str, children: Vec<FakeNode>) -> FakeNode {
    self.node(name, None, Some(children))
  }

  /// Titled leaf.
  pub(crate) fn item(&self, name: &str, title: &str) -> FakeNode {
    self.node(name, Some(title), None)
  }

  pub(crate) fn calls(&self) -> Vec<Call> {
    self.log.borrow().clone()
  }

  /// Names of nodes an action was performed on, in order.
  pub(crate) fn pressed(&self) -> Vec<String> {
    self
      .log
      .borrow()
      .iter()
      .filter_map(|call| match call {
        Call::Perform(name, _) => Some(name.clone()),
        Call::Read(..) => None,
      })
      .collect()
  }

  /// Whether any attribute of the named node was read.
  pub(crate) fn visited(&self, name: &str) -> bool {
    self
      .log
      .borrow()
      .iter()
      .any(|call| matches!(call, Call::Read(n, _) if n == name))
  }
}

struct FakeInner {
  name: String,
  attributes: RefCell<HashMap<Attribute, RawValue<FakeNode>>>,
  faults: RefCell<HashMap<Attribute, AxErrorCode>>,
  action_fault: RefCell<Option<AxErrorCode>>,
  log: Log,
}

/// A node of a [`FakeTree`].
#[derive(Clone)]
pub(crate) struct FakeNode(Rc<FakeInner>);

impl FakeNode {
  pub(crate) fn set(&self, attribute: Attribute, value: RawValue<Self>) {
    self.0.attributes.borrow_mut().insert(attribute, value);
  }

  /// Make reads of `attribute` fail with `code`.
  pub(crate) fn fail_read(self, attribute: Attribute, code: AxErrorCode) -> Self {
    self.0.faults.borrow_mut().insert(attribute, code);
    self
  }

  /// Make every action fail with `code`.
  pub(crate) fn fail_action(self, code: AxErrorCode) -> Self {
    *self.0.action_fault.borrow_mut() = Some(code);
    self
  }
}

impl ElementRef for FakeNode {
  fn copy_attribute(&self, attribute: Attribute) -> Result<RawValue<Self>, AxErrorCode> {
    self
      .0
      .log
      .borrow_mut()
      .push(Call::Read(self.0.name.clone(), attribute));
    if let Some(code) = self.0.faults.borrow().get(&attribute) {
      return Err(*code);
    }
    self
      .0
      .attributes
      .borrow()
      .get(&attribute)
      .cloned()
      .ok_or(AxErrorCode::NO_VALUE)
  }

  fn perform_action(&self, action: Action) -> Result<(), AxErrorCode> {
    self
      .0
      .log
      .borrow_mut()
      .push(Call::Perform(self.0.name.clone(), action));
    match *self.0.action_fault.borrow() {
      Some(code) => Err(code),
      None => Ok(()),
    }
  }

  fn attribute_names(&self) -> Vec<String> {
    let mut names: Vec<String> = self
      .0
      .attributes
      .borrow()
      .keys()
      .map(|a| format!("AX{a:?}"))
      .collect();
    names.sort();
    names
  }

  fn action_names(&self) -> Vec<String> {
    vec!["AXPress".to_string()]
  }
}

impl fmt::Debug for FakeNode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("FakeNode").field(&self.0.name).finish()
  }
}
