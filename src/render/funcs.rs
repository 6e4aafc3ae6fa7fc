use gtmpl::{FuncError, Value};

/// `join SEP LIST`, same argument order as Go's `strings.Join` call in templates
/// (`{{join "," .hosts}}`).
pub fn join(args: &[Value]) -> Result<Value, FuncError> {
    let [separator, sequence] = args else {
        return Err(FuncError::Generic(format!(
            "join requires exactly 2 arguments, got {}",
            args.len()
        )));
    };

    let Value::String(separator) = separator else {
        return Err(FuncError::Generic(format!(
            "join separator must be a string, got {:?}",
            separator
        )));
    };

    let items: &[Value] = match sequence {
        Value::Array(items) => items,
        Value::NoValue | Value::Nil => &[],
        other => {
            return Err(FuncError::Generic(format!(
                "join expects a list of strings, got {:?}",
                other
            )))
        }
    };

    let strings = items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.as_str()),
            other => Err(FuncError::Generic(format!(
                "join expects a list of strings, found element {:?}",
                other
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Value::String(strings.join(separator.as_str())))
}
