use std::fmt::Display;
use std::io::Write;
/////////////////////////////////////////
use anyhow::Result;
/////////////////////////////////////////
use crate::console::Console;
/////////////////////////////////////////

/// Reference to an arbitrary value that may be absent.
pub type ObjectRef = Option<Box<dyn Display>>;

/// Where `createObject` gets its object from. This is the `getNullObject` step of the chain.
pub trait ObjectSource {
    fn get_object<W: Write>(&self, console: &mut Console<W>) -> Result<ObjectRef>;
}

/// The fixture's source: always hands back an absent reference.
pub struct NullObjectSource;

impl ObjectSource for NullObjectSource {
    fn get_object<W: Write>(&self, console: &mut Console<W>) -> Result<ObjectRef> {
        console.line("getNullObject: Returning null.")?;
        Ok(None)
    }
}

/// A source that returns a real value, used to run the chain without the failure.
pub struct ValueObjectSource<T> {
    value: T,
}

impl<T: Display + Clone + 'static> ValueObjectSource<T> {
    pub fn new(value: T) -> Self {
        ValueObjectSource { value }
    }
}

impl<T: Display + Clone + 'static> ObjectSource for ValueObjectSource<T> {
    fn get_object<W: Write>(&self, console: &mut Console<W>) -> Result<ObjectRef> {
        console.line(&format!("getNullObject: Returning {}.", self.value))?;
        let object: Box<dyn Display> = Box::new(self.value.clone());
        Ok(Some(object))
    }
}
