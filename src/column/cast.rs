//! Coercion between element types

use num_traits::{NumCast, ToPrimitive};

use crate::column::{
    BooleanColumn, Column, ColumnType, Float64Column, Int64Column, ObjectColumn, ObjectValue,
    StringColumn,
};
use crate::error::{Error, Result};

impl Column {
    /// Convert to `column_type`, keeping nulls
    pub fn cast(&self, column_type: ColumnType) -> Result<Column> {
        if self.column_type() == column_type {
            return Ok(self.clone());
        }
        Ok(match column_type {
            ColumnType::Boolean => self.to_boolean()?.into(),
            ColumnType::Int64 => self.to_int64()?.into(),
            ColumnType::Float64 => self.to_float64()?.into(),
            ColumnType::String => self.to_string_column().into(),
            ColumnType::Object => self.to_object().into(),
        })
    }

    /// Integer view; floats truncate toward zero, text must parse as a number
    pub fn to_int64(&self) -> Result<Int64Column> {
        let values = match self {
            Column::Int64(col) => return Ok(col.clone()),
            Column::Boolean(col) => col.iter().map(|v| v.map(|b| b as i64)).collect(),
            Column::Float64(col) => col
                .iter()
                .map(|v| v.map(float_to_i64).transpose())
                .collect::<Result<Vec<_>>>()?,
            Column::String(col) => col
                .iter()
                .map(|v| v.map(parse_i64).transpose())
                .collect::<Result<Vec<_>>>()?,
            Column::Object(col) => col
                .iter()
                .map(|v| v.map(object_to_i64).transpose())
                .collect::<Result<Vec<_>>>()?,
        };
        Ok(renamed(Int64Column::from_options(values), self.name(), |c, n| c.set_name(n)))
    }

    /// Floating-point view; text must parse as a number
    pub fn to_float64(&self) -> Result<Float64Column> {
        let values = match self {
            Column::Float64(col) => return Ok(col.clone()),
            Column::Boolean(col) => col
                .iter()
                .map(|v| v.map(|b| if b { 1.0 } else { 0.0 }))
                .collect(),
            Column::Int64(col) => col.iter().map(|v| v.and_then(|i| i.to_f64())).collect(),
            Column::String(col) => col
                .iter()
                .map(|v| v.map(parse_f64).transpose())
                .collect::<Result<Vec<_>>>()?,
            Column::Object(col) => col
                .iter()
                .map(|v| v.map(object_to_f64).transpose())
                .collect::<Result<Vec<_>>>()?,
        };
        Ok(renamed(Float64Column::from_options(values), self.name(), |c, n| c.set_name(n)))
    }

    /// Boolean view; numbers are `true` when non-zero
    pub fn to_boolean(&self) -> Result<BooleanColumn> {
        let values = match self {
            Column::Boolean(col) => return Ok(col.clone()),
            Column::Int64(col) => col.iter().map(|v| v.map(|i| i != 0)).collect(),
            Column::Float64(col) => col.iter().map(|v| v.map(|f| f != 0.0)).collect(),
            Column::String(col) => col
                .iter()
                .map(|v| v.map(parse_bool).transpose())
                .collect::<Result<Vec<_>>>()?,
            Column::Object(col) => col
                .iter()
                .map(|v| v.map(object_to_bool).transpose())
                .collect::<Result<Vec<_>>>()?,
        };
        Ok(renamed(BooleanColumn::from_options(values), self.name(), |c, n| c.set_name(n)))
    }

    /// Text view of every non-null element
    pub fn to_string_column(&self) -> StringColumn {
        if let Column::String(col) = self {
            return col.clone();
        }
        let values = (0..self.len())
            .map(|i| {
                let value = self.scalar_at(i);
                (!value.is_null()).then(|| value.to_string())
            })
            .collect();
        renamed(StringColumn::from_options(values), self.name(), |c, n| c.set_name(n))
    }

    /// Generic object view
    pub fn to_object(&self) -> ObjectColumn {
        if let Column::Object(col) = self {
            return col.clone();
        }
        let values = (0..self.len()).map(|i| self.scalar_at(i).into_object()).collect();
        renamed(ObjectColumn::new(values), self.name(), |c, n| c.set_name(n))
    }
}

fn renamed<C>(mut col: C, name: Option<&str>, set_name: fn(&mut C, String)) -> C {
    if let Some(name) = name {
        set_name(&mut col, name.to_string());
    }
    col
}

fn float_to_i64(value: f64) -> Result<i64> {
    <i64 as NumCast>::from(value.trunc())
        .ok_or_else(|| Error::Cast(format!("cannot represent {} as int64", value)))
}

fn parse_i64(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    match trimmed.parse::<i64>() {
        Ok(v) => Ok(v),
        Err(_) => parse_f64(trimmed).and_then(float_to_i64),
    }
}

fn parse_f64(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| Error::Cast(format!("cannot parse '{}' as a number", text)))
}

fn parse_bool(text: &str) -> Result<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        other => Err(Error::Cast(format!("cannot parse '{}' as a boolean", other))),
    }
}

fn object_to_i64(value: &ObjectValue) -> Result<i64> {
    match value {
        ObjectValue::Boolean(b) => Ok(*b as i64),
        ObjectValue::Int64(i) => Ok(*i),
        ObjectValue::Float64(f) => float_to_i64(*f),
        ObjectValue::String(s) => parse_i64(s),
        ObjectValue::Tuple(_) => Err(Error::Cast(format!("cannot convert {} to int64", value))),
    }
}

fn object_to_f64(value: &ObjectValue) -> Result<f64> {
    match value {
        ObjectValue::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
        ObjectValue::Int64(i) => Ok(*i as f64),
        ObjectValue::Float64(f) => Ok(*f),
        ObjectValue::String(s) => parse_f64(s),
        ObjectValue::Tuple(_) => Err(Error::Cast(format!("cannot convert {} to float64", value))),
    }
}

fn object_to_bool(value: &ObjectValue) -> Result<bool> {
    match value {
        ObjectValue::Boolean(b) => Ok(*b),
        ObjectValue::Int64(i) => Ok(*i != 0),
        ObjectValue::Float64(f) => Ok(*f != 0.0),
        ObjectValue::String(s) => parse_bool(s),
        ObjectValue::Tuple(_) => Err(Error::Cast(format!("cannot convert {} to boolean", value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Scalar;

    #[test]
    fn test_string_to_int64_parses_numbers() {
        let col: Column = StringColumn::from_options(vec![
            Some("12".to_string()),
            None,
            Some("3.9".to_string()),
        ])
        .into();
        let ints = col.to_int64().unwrap();
        assert_eq!(ints.iter().collect::<Vec<_>>(), vec![Some(12), None, Some(3)]);
    }

    #[test]
    fn test_unparsable_text_is_a_cast_error() {
        let col: Column = StringColumn::from_strs(&["abc"]).into();
        assert!(matches!(col.to_float64(), Err(Error::Cast(_))));
    }

    #[test]
    fn test_boolean_round_trip_through_int64() {
        let col: Column = BooleanColumn::from_options(vec![Some(true), None, Some(false)]).into();
        let ints: Column = col.to_int64().unwrap().into();
        assert_eq!(ints.scalars(), vec![Scalar::Int64(1), Scalar::Null, Scalar::Int64(0)]);
        let back = ints.to_boolean().unwrap();
        assert_eq!(back.iter().collect::<Vec<_>>(), vec![Some(true), None, Some(false)]);
    }
}
