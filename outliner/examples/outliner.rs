use std::fs::File;

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use outliner::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("outliner.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)?;

    let mut tree = Tree::with_config(TreeConfig::default().with_row_height(1).with_indent(2));
    tree.set_viewport(Rect::new(0, 0, 40, 12));

    let scene = tree.add_item(Parent::Root, TreeItem::new("Scene").open(true))?;
    let lights = tree.add_item(scene.into(), TreeItem::new("Lights").open(true))?;
    let props = tree.add_item(scene.into(), TreeItem::new("Props").open(true))?;
    for name in ["Sun", "Fill", "Rim"] {
        tree.add_item(lights.into(), TreeItem::new(name))?;
    }
    for name in ["Crate", "Barrel"] {
        tree.add_item(props.into(), TreeItem::new(name))?;
    }

    tree.on(TreeEventKind::Reparent, |event| {
        if let TreeEvent::Reparent(entries) = event {
            for entry in entries {
                println!(
                    "reparent {}: {} -> {} ({:?})",
                    entry.item, entry.old_parent, entry.new_parent, entry.placement
                );
            }
        }
    });

    println!("before:");
    print(&tree);

    // Select Fill and Rim, then drag them onto Props. One-line rows drop
    // inside whatever row the pointer is on.
    let fill = tree.find_by_text("Fill").ok_or("missing Fill")?;
    let rim = tree.find_by_text("Rim").ok_or("missing Rim")?;
    let props = tree.find_by_text("Props").ok_or("missing Props")?;
    tree.click_item(fill, Modifiers::new());
    tree.click_item(rim, Modifiers::shift());

    let press = row_of(&tree, fill)?;
    let target = row_of(&tree, props)?;
    tree.on_click(mouse(MouseEventKind::Down(MouseButton::Left), press));
    tree.on_drag(mouse(MouseEventKind::Drag(MouseButton::Left), target));
    println!("indicator: {:?}", tree.drop_indicator());
    tree.on_release(mouse(MouseEventKind::Up(MouseButton::Left), target));

    // From Rim, step up to Fill, out to Props, then collapse it.
    for code in [KeyCode::Up, KeyCode::Left, KeyCode::Left] {
        let key = Key::try_from(code).map_err(|code| format!("unmapped key {code:?}"))?;
        tree.on_key(key, KeyModifiers::NONE.into());
    }

    println!("after:");
    print(&tree);
    Ok(())
}

fn mouse(kind: MouseEventKind, row: u16) -> PointerEvent {
    MouseEvent {
        kind,
        column: 4,
        row,
        modifiers: KeyModifiers::NONE,
    }
    .into()
}

fn row_of(tree: &Tree, item: ItemId) -> Result<u16, Box<dyn std::error::Error>> {
    Ok(tree.row_rect(item).ok_or("row not visible")?.y)
}

fn print(tree: &Tree) {
    for row in tree.flatten() {
        let marker = match (row.has_children, row.is_open) {
            (true, true) => "v",
            (true, false) => ">",
            _ => " ",
        };
        let selected = if tree.is_selected(row.item) { "*" } else { "" };
        println!(
            "{:indent$}{} {}{}",
            "",
            marker,
            tree.text(row.item).unwrap_or_default(),
            selected,
            indent = usize::from(row.depth) * 2
        );
    }
}
