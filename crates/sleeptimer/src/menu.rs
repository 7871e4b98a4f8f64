/*!
Menu path activation.

Walks an application's menu tree depth-first, matching each level by
title, and presses the item at the end of the path.

- Children are visited in platform order; the first match wins.
- Untitled nodes are walked through without consuming a path segment.
  Some menus wrap their real items in untitled containers.
- The first press ends the whole search.
- A missing path is a silent no-op.
*/

use crate::element::UiElement;
use crate::platform::ElementRef;

/// Press the menu item reached from `root` by following `path` by title.
///
/// `root` is typically an application's menu bar. Does nothing if `path`
/// is empty or cannot be followed.
///
/// # Panics
///
/// If the accessibility API faults on a read, or if pressing the matched
/// item fails (e.g. the application quit mid-search).
pub fn press_menu_item<H, S>(root: &UiElement<H>, path: &[S])
where
  H: ElementRef,
  S: AsRef<str>,
{
  if path.is_empty() {
    return;
  }
  if !press_from(root, path, 0) {
    log::debug!(
      "Menu path {:?} not found",
      path.iter().map(AsRef::<str>::as_ref).collect::<Vec<_>>()
    );
  }
}

/// Returns true once an item has been pressed.
fn press_from<H, S>(element: &UiElement<H>, path: &[S], idx: usize) -> bool
where
  H: ElementRef,
  S: AsRef<str>,
{
  let Some(segment) = path.get(idx).map(AsRef::<str>::as_ref) else {
    return false;
  };
  let Some(children) = element.children() else {
    return false;
  };
  for item in &children {
    match item.title() {
      None => {
        if press_from(item, path, idx) {
          return true;
        }
      }
      Some(title) if title == segment => {
        if idx + 1 < path.len() {
          if press_from(item, path, idx + 1) {
            return true;
          }
        } else {
          log::info!("Pressing menu item {title:?}");
          item.invoke_default_action();
          return true;
        }
      }
      Some(title) => {
        log::trace!("Skipping menu item {title:?} (looking for {segment:?})");
      }
    }
  }
  false
}
