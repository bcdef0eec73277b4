use anyhow::anyhow;

use counterfeit::entities::ConstructorInfo;
use counterfeit::{FakeObject, TypeCatalog, TypeDescriptor, TypeKey, Value};

pub trait PaymentGateway {}

pub trait Auditable {}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Currency {
    #[default]
    Euro,
    Dollar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub number: u32,
    pub customer: Option<Customer>,
    pub currency: Currency,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub invoice: Invoice,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ledger(pub Box<Account>);

#[derive(Debug, Clone, PartialEq)]
pub struct Account(pub Box<Ledger>);

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub entries: u32,
    pub ledger: Option<Ledger>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillingService {
    pub gateway: FakeObject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaxRate(pub u16);

pub fn billing_catalog() -> TypeCatalog {
    let mut catalog = TypeCatalog::new();
    catalog
        .register_default::<Currency>()
        .register(TypeDescriptor::interface::<dyn PaymentGateway>())
        .register(TypeDescriptor::interface::<dyn Auditable>())
        .register(TypeDescriptor::concrete::<Customer>().with_constructor(
            ConstructorInfo::new(vec![TypeKey::of::<String>()], |arguments| {
                Ok(Value::new(Customer {
                    name: arguments.get(0)?,
                }))
            }),
        ))
        .register(
            TypeDescriptor::concrete::<Invoice>()
                .with_constructor(ConstructorInfo::new(vec![TypeKey::of::<u32>()], |arguments| {
                    Ok(Value::new(Invoice {
                        number: arguments.get(0)?,
                        customer: None,
                        currency: Currency::default(),
                    }))
                }))
                .with_constructor(ConstructorInfo::new(
                    vec![
                        TypeKey::of::<u32>(),
                        TypeKey::of::<Customer>(),
                        TypeKey::of::<Currency>(),
                    ],
                    |arguments| {
                        Ok(Value::new(Invoice {
                            number: arguments.get(0)?,
                            customer: Some(arguments.get(1)?),
                            currency: arguments.get(2)?,
                        }))
                    },
                ))
                .with_constructor(
                    ConstructorInfo::new(vec![TypeKey::of::<String>()], |_| {
                        Err(anyhow!("Invoices can't be parsed yet"))
                    })
                    .non_public(),
                )
                .with_interface(TypeKey::of::<dyn Auditable>()),
        )
        .register(TypeDescriptor::concrete::<Receipt>().with_constructor(
            ConstructorInfo::new(vec![TypeKey::of::<Invoice>()], |arguments| {
                Ok(Value::new(Receipt {
                    invoice: arguments.get(0)?,
                }))
            }),
        ))
        .register(TypeDescriptor::concrete::<Ledger>().with_constructor(
            ConstructorInfo::new(vec![TypeKey::of::<Account>()], |arguments| {
                Ok(Value::new(Ledger(Box::new(arguments.get(0)?))))
            }),
        ))
        .register(TypeDescriptor::concrete::<Account>().with_constructor(
            ConstructorInfo::new(vec![TypeKey::of::<Ledger>()], |arguments| {
                Ok(Value::new(Account(Box::new(arguments.get(0)?))))
            }),
        ))
        .register(
            TypeDescriptor::concrete::<Statement>()
                .with_constructor(ConstructorInfo::new(
                    vec![TypeKey::of::<u32>(), TypeKey::of::<Ledger>()],
                    |arguments| {
                        Ok(Value::new(Statement {
                            entries: arguments.get(0)?,
                            ledger: Some(arguments.get(1)?),
                        }))
                    },
                ))
                .with_constructor(ConstructorInfo::new(vec![TypeKey::of::<u32>()], |arguments| {
                    Ok(Value::new(Statement {
                        entries: arguments.get(0)?,
                        ledger: None,
                    }))
                })),
        )
        .register(TypeDescriptor::abstract_type::<BillingService>().with_constructor(
            ConstructorInfo::new(vec![TypeKey::of::<dyn PaymentGateway>()], |arguments| {
                Ok(Value::new(BillingService {
                    gateway: arguments.get(0)?,
                }))
            }),
        ))
        .register(TypeDescriptor::sealed::<TaxRate>().with_parameterless_constructor(|| {
            Ok(Value::new(TaxRate(20)))
        }));

    catalog
}
