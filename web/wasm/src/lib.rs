use initdeal::{Column, Side, Table, TableOptions};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmTable {
    table: Table,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            table: Table::new(TableOptions::default(), seed as u64),
        }
    }

    /// Starts over with an empty roster.
    pub fn restart(&mut self, seed: u32) {
        self.table = Table::new(TableOptions::default(), seed as u64);
    }

    pub fn add_friend(&mut self, name: &str) -> Result<(), JsValue> {
        self.table.add_name(Side::Friends, name).map_err(js_err)
    }

    pub fn add_foe(&mut self, name: &str) -> Result<(), JsValue> {
        self.table.add_name(Side::Foes, name).map_err(js_err)
    }

    pub fn remove(&mut self, side: &str, index: u32) -> Result<(), JsValue> {
        let side = parse_side(side)?;
        self.table
            .remove_name(side, index as usize)
            .map(|_| ())
            .map_err(js_err)
    }

    pub fn move_up(&mut self, side: &str, index: u32) -> Result<(), JsValue> {
        let side = parse_side(side)?;
        self.table.move_up(side, index as usize).map_err(js_err)
    }

    pub fn move_down(&mut self, side: &str, index: u32) -> Result<(), JsValue> {
        let side = parse_side(side)?;
        self.table.move_down(side, index as usize).map_err(js_err)
    }

    pub fn clear(&mut self, side: &str) -> Result<(), JsValue> {
        let side = parse_side(side)?;
        self.table.clear_side(side);
        Ok(())
    }

    pub fn deal(&mut self) -> Option<u32> {
        self.table.deal().map(|index| index as u32)
    }

    pub fn next(&mut self) -> Option<u32> {
        self.table.next_turn().map(|index| index as u32)
    }

    /// Swaps the current card. The error message is also part of the next
    /// snapshot.
    pub fn swap(&mut self, input: &str) -> Result<Option<u32>, JsValue> {
        self.table
            .swap(input)
            .map(|current| current.map(|index| index as u32))
            .map_err(js_err)
    }

    pub fn reset(&mut self) {
        self.table.reset();
    }

    pub fn can_swap(&self, input: &str) -> bool {
        self.table.can_swap(input)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let roster = self.table.roster();
        let view = self.table.view();

        let snapshot = Snapshot {
            friends: roster.side(Side::Friends).to_vec(),
            foes: roster.side(Side::Foes).to_vec(),
            columns: view.columns.iter().map(JsColumn::from).collect(),
            divider_after: view.divider_after.map(|index| index as u32),
            current: self.table.current_index().map(|index| index as u32),
            swap_error: self.table.swap_error().map(|err| err.to_string()),
            can_deal: self.table.can_deal(),
            can_advance: self.table.can_advance(),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    friends: Vec<String>,
    foes: Vec<String>,
    columns: Vec<JsColumn>,
    divider_after: Option<u32>,
    current: Option<u32>,
    swap_error: Option<String>,
    can_deal: bool,
    can_advance: bool,
}

#[derive(Serialize)]
struct JsColumn {
    name: Option<String>,
    card: u8,
    is_current: bool,
    side: Option<&'static str>,
}

impl From<&Column<'_>> for JsColumn {
    fn from(column: &Column<'_>) -> Self {
        Self {
            name: column.name.map(str::to_string),
            card: column.card,
            is_current: column.is_current,
            side: column.side.map(Side::as_str),
        }
    }
}

fn parse_side(side: &str) -> Result<Side, JsValue> {
    match side {
        "friends" => Ok(Side::Friends),
        "foes" => Ok(Side::Foes),
        _ => Err(JsValue::from_str("side must be \"friends\" or \"foes\"")),
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
