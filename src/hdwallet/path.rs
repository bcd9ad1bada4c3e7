/*
    This module helps with parsing deriveration paths passed in as strings
    as vectors of ChildOptions that can be used to derive a child key.

    Accepted form: an optional leading "m", then "/" separated indexes
    below 2^31, each optionally suffixed with ' or h for hardened.
*/

use std::{fmt, str::FromStr};

use crate::hdwallet::{
    ChildOptions,
    HDWError,
    HARDENED_OFFSET
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    pub children: Vec<ChildOptions>
}

impl Path {
    pub fn empty() -> Self {
        Self {
            children: vec![]
        }
    }

    /// Raw child numbers, hardened ones with the offset added.
    pub fn indexes(&self) -> Result<Vec<u32>, HDWError> {
        self.children.iter().map(|c| c.index()).collect()
    }
}

fn parse_child(segment: &str, path: &str) -> Result<ChildOptions, HDWError> {
    let malformed = || HDWError::MalformedPath(path.to_string());

    let (digits, hardened) = match segment.strip_suffix('\'').or_else(|| segment.strip_suffix('h')) {
        Some(x) => (x, true),
        None => (segment, false)
    };

    //u32::from_str would also accept a leading '+'
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed())
    }
    let index: u32 = digits.parse().map_err(|_| malformed())?;
    if index >= HARDENED_OFFSET {
        return Err(malformed())
    }

    Ok(if hardened { ChildOptions::Hardened(index) } else { ChildOptions::Normal(index) })
}

impl FromStr for Path {
    type Err = HDWError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let mut segments: Vec<&str> = path.split('/').collect();
        if segments[0] == "m" {
            segments.remove(0);
        }

        let children = segments
            .iter()
            .map(|s| parse_child(s, path))
            .collect::<Result<Vec<ChildOptions>, HDWError>>()?;

        Ok(Self { children })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "m")?;
        for child in &self.children {
            write!(f, "/{}", child)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_test() {
        let path_str = "m/84'/0'/0'/0/0";
        let path_struct = Path {
            children: vec![
                ChildOptions::Hardened(84),
                ChildOptions::Hardened(0),
                ChildOptions::Hardened(0),
                ChildOptions::Normal(0),
                ChildOptions::Normal(0)
            ]
        };

        assert_eq!(path_str, path_struct.to_string());
        assert_eq!(path_str.parse::<Path>().unwrap(), path_struct);
    }

    #[test]
    fn optional_root_and_h_suffix() {
        let a: Path = "44h/301h/0h/0/5".parse().unwrap();
        let b: Path = "m/44'/301'/0'/0/5".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.indexes().unwrap(), vec![0x8000002c, 0x8000012d, 0x80000000, 0, 5]);
        assert_eq!("m".parse::<Path>().unwrap(), Path::empty());
        assert_eq!(Path::empty().to_string(), "m");
    }

    #[test]
    fn malformed_paths() {
        for bad in ["", "m/", "m//0", "m/x", "m/0'/", "m/+1", "m/1''", "m/2147483648", "m/2147483648'", "n/0", "m/-1"].iter() {
            assert_eq!(bad.parse::<Path>(), Err(HDWError::MalformedPath(bad.to_string())), "{}", bad);
        }
        assert!("m/2147483647'".parse::<Path>().is_ok());
    }
}
