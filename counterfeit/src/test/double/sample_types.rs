use anyhow::anyhow;

use crate::entities::{ConstructorInfo, TypeCatalog, TypeDescriptor, TypeKey, Value};
use crate::fake::FakeObject;

pub trait Notifier {}

pub trait Disposable {}

pub trait Vehicle {}

/// Concrete type with a single constructor, failing above 2000 horse power.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub horse_power: u32,
}

/// Concrete type with two constructors accepting the same arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Garage {
    pub slots: u8,
}

/// Sealed type: can be a dummy, never a fake.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelCount(pub u8);

/// Concrete type with constructors of arity 0, 1 and 2.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub engine: Engine,
    pub name: String,
    pub constructor_arity: usize,
}

impl Car {
    pub fn new(engine: Engine, name: &str, constructor_arity: usize) -> Self {
        Self {
            engine,
            name: name.to_string(),
            constructor_arity,
        }
    }
}

/// Needs an [Egg].
#[derive(Debug, Clone, PartialEq)]
pub struct Chicken(pub Box<Egg>);

/// Needs a [Chicken].
#[derive(Debug, Clone, PartialEq)]
pub struct Egg(pub Box<Chicken>);

/// Concrete type whose largest constructor needs a [Chicken].
#[derive(Debug, Clone, PartialEq)]
pub struct Bike {
    pub constructor_arity: usize,
}

/// Abstract type whose constructor builds the base state of its fakes.
#[derive(Debug, Clone, PartialEq)]
pub struct Depot {
    pub name: String,
}

/// Concrete type depending on an interface.
#[derive(Debug, Clone, PartialEq)]
pub struct Alarm {
    pub notifier: FakeObject,
}

/// Concrete type depending twice on the same interface.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub first: FakeObject,
    pub second: FakeObject,
}

/// Concrete type whose largest constructor always fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Flaky(pub u32);

/// Catalog knowing the primitive types and every sample type.
pub fn sample_catalog() -> TypeCatalog {
    let mut catalog = TypeCatalog::new();
    catalog
        .register(TypeDescriptor::interface::<dyn Notifier>())
        .register(TypeDescriptor::interface::<dyn Disposable>())
        .register(TypeDescriptor::interface::<dyn Vehicle>())
        .register(
            TypeDescriptor::concrete::<Engine>()
                .with_constructor(ConstructorInfo::new(
                    vec![TypeKey::of::<u32>()],
                    |arguments| {
                        let horse_power = arguments.get::<u32>(0)?;
                        if horse_power > 2000 {
                            return Err(anyhow!("An engine can't exceed 2000 horse power"));
                        }
                        Ok(Value::new(Engine { horse_power }))
                    },
                ))
                .with_interface(TypeKey::of::<dyn Vehicle>()),
        )
        .register(
            TypeDescriptor::concrete::<Garage>()
                .with_constructor(ConstructorInfo::new(vec![TypeKey::of::<u8>()], |arguments| {
                    Ok(Value::new(Garage { slots: arguments.get(0)? }))
                }))
                .with_constructor(ConstructorInfo::new(vec![TypeKey::of::<u8>()], |arguments| {
                    Ok(Value::new(Garage { slots: arguments.get::<u8>(0)? * 2 }))
                })),
        )
        .register(TypeDescriptor::sealed::<WheelCount>().with_constructor(
            ConstructorInfo::new(vec![TypeKey::of::<u8>()], |arguments| {
                Ok(Value::new(WheelCount(arguments.get(0)?)))
            }),
        ))
        .register(
            TypeDescriptor::concrete::<Car>()
                .with_parameterless_constructor(|| {
                    Ok(Value::new(Car::new(Engine { horse_power: 70 }, "Default", 0)))
                })
                .with_constructor(ConstructorInfo::new(
                    vec![TypeKey::of::<String>()],
                    |arguments| {
                        let name = arguments.get::<String>(0)?;
                        Ok(Value::new(Car::new(Engine { horse_power: 70 }, &name, 1)))
                    },
                ))
                .with_constructor(ConstructorInfo::new(
                    vec![TypeKey::of::<Engine>(), TypeKey::of::<String>()],
                    |arguments| {
                        let name = arguments.get::<String>(1)?;
                        Ok(Value::new(Car::new(arguments.get(0)?, &name, 2)))
                    },
                )),
        )
        .register(TypeDescriptor::concrete::<Chicken>().with_constructor(
            ConstructorInfo::new(vec![TypeKey::of::<Egg>()], |arguments| {
                Ok(Value::new(Chicken(Box::new(arguments.get(0)?))))
            }),
        ))
        .register(TypeDescriptor::concrete::<Egg>().with_constructor(ConstructorInfo::new(
            vec![TypeKey::of::<Chicken>()],
            |arguments| Ok(Value::new(Egg(Box::new(arguments.get(0)?)))),
        )))
        .register(
            TypeDescriptor::concrete::<Bike>()
                .with_constructor(ConstructorInfo::new(
                    vec![TypeKey::of::<Chicken>(), TypeKey::of::<String>()],
                    |_| Ok(Value::new(Bike { constructor_arity: 2 })),
                ))
                .with_constructor(ConstructorInfo::new(vec![TypeKey::of::<String>()], |_| {
                    Ok(Value::new(Bike { constructor_arity: 1 }))
                })),
        )
        .register(TypeDescriptor::abstract_type::<Depot>().with_constructor(
            ConstructorInfo::new(vec![TypeKey::of::<String>()], |arguments| {
                Ok(Value::new(Depot { name: arguments.get(0)? }))
            }),
        ))
        .register(TypeDescriptor::concrete::<Alarm>().with_constructor(ConstructorInfo::new(
            vec![TypeKey::of::<dyn Notifier>()],
            |arguments| Ok(Value::new(Alarm { notifier: arguments.get(0)? })),
        )))
        .register(TypeDescriptor::concrete::<Pair>().with_constructor(ConstructorInfo::new(
            vec![TypeKey::of::<dyn Notifier>(), TypeKey::of::<dyn Notifier>()],
            |arguments| {
                Ok(Value::new(Pair {
                    first: arguments.get(0)?,
                    second: arguments.get(1)?,
                }))
            },
        )))
        .register(
            TypeDescriptor::concrete::<Flaky>()
                .with_constructor(ConstructorInfo::new(
                    vec![TypeKey::of::<u32>(), TypeKey::of::<u32>()],
                    |_| Err(anyhow!("Flaky is out of order")),
                ))
                .with_constructor(ConstructorInfo::new(vec![TypeKey::of::<u32>()], |_| {
                    Ok(Value::new(Flaky(1)))
                })),
        );

    catalog
}
