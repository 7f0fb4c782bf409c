use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppState, Focus};

fn item(key: &'static str, desc: &'static str) -> FooterItem {
    FooterItem {
        key,
        desc,
        highlighted: false,
    }
}

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    if state.dictation.listening {
        return vec![FooterGroup {
            name: "MIC",
            items: vec![FooterItem {
                key: "Ctrl+Space",
                desc: "stop",
                highlighted: true,
            }],
        }];
    }

    let mut groups = Vec::new();
    match state.focus {
        Focus::Composer => {
            let mut items = vec![item("Enter", "send")];
            if state.suggestions_visible() {
                items.push(item("↑/↓", "pick"));
                items.push(item("Esc", "close"));
            }
            items.push(item("Tab", "read"));
            groups.push(FooterGroup {
                name: "CHAT",
                items,
            });
            if !state.session.quick_replies.is_empty() {
                groups.push(FooterGroup {
                    name: "REPLY",
                    items: vec![item("Alt+1-9", "quick")],
                });
            }
        }
        Focus::Transcript => {
            groups.push(FooterGroup {
                name: "READ",
                items: vec![
                    item("j/k", "scroll"),
                    item("G", "bottom"),
                    item("i", "type"),
                    item("q", "quit"),
                ],
            });
            if !state.session.quick_replies.is_empty() {
                groups.push(FooterGroup {
                    name: "REPLY",
                    items: vec![item("1-9", "quick")],
                });
            }
        }
    }

    groups.push(FooterGroup {
        name: "MIC",
        items: vec![FooterItem {
            key: "Ctrl+Space",
            desc: "dictate",
            highlighted: false,
        }],
    });
    groups
}
