use alloc::string::String;
use alloc::vec::Vec;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Literal(String),
    Argument(String),
    Number(FormatArg),
    Date(FormatArg),
    Time(FormatArg),
    Pound,
    Plural(PluralElement),
    Select(SelectElement),
    Tag(TagElement),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatArg {
    pub name: String,
    pub style: Option<ArgStyle>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgStyle {
    Text(String),
    Number(NumberSkeleton),
    DateTime(DateTimeSkeleton),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NumberSkeleton {
    pub tokens: Vec<SkeletonToken>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkeletonToken {
    pub stem: String,
    pub options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateTimeSkeleton {
    pub pattern: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PluralKind {
    Cardinal,
    Ordinal,
}

impl PluralKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            PluralKind::Cardinal => "plural",
            PluralKind::Ordinal => "selectordinal",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PluralElement {
    pub name: String,
    pub kind: PluralKind,
    pub offset: Option<u32>,
    pub options: OptionList,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectElement {
    pub name: String,
    pub options: OptionList,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagElement {
    pub name: String,
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorOption {
    pub key: String,
    pub value: Vec<Node>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionList(Vec<SelectorOption>);

impl OptionList {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, key: impl Into<String>, value: Vec<Node>) {
        self.0.push(SelectorOption {
            key: key.into(),
            value,
        });
    }

    pub fn get(&self, key: &str) -> Option<&[Node]> {
        self.0
            .iter()
            .find(|option| option.key == key)
            .map(|option| option.value.as_slice())
    }

    pub fn iter(&self) -> core::slice::Iter<'_, SelectorOption> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|option| option.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<Node>)> for OptionList {
    fn from_iter<I: IntoIterator<Item = (K, Vec<Node>)>>(iter: I) -> Self {
        let mut list = OptionList::new();
        for (key, value) in iter {
            list.push(key, value);
        }
        list
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a SelectorOption;
    type IntoIter = core::slice::Iter<'a, SelectorOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Node {
    pub fn literal(value: impl Into<String>) -> Self {
        Node::Literal(value.into())
    }

    pub fn argument(name: impl Into<String>) -> Self {
        Node::Argument(name.into())
    }

    pub fn number(name: impl Into<String>, style: Option<ArgStyle>) -> Self {
        Node::Number(FormatArg {
            name: name.into(),
            style,
        })
    }

    pub fn date(name: impl Into<String>, style: Option<ArgStyle>) -> Self {
        Node::Date(FormatArg {
            name: name.into(),
            style,
        })
    }

    pub fn time(name: impl Into<String>, style: Option<ArgStyle>) -> Self {
        Node::Time(FormatArg {
            name: name.into(),
            style,
        })
    }

    pub fn plural(
        name: impl Into<String>,
        kind: PluralKind,
        offset: Option<u32>,
        options: OptionList,
    ) -> Self {
        Node::Plural(PluralElement {
            name: name.into(),
            kind,
            offset,
            options,
        })
    }

    pub fn select(name: impl Into<String>, options: OptionList) -> Self {
        Node::Select(SelectElement {
            name: name.into(),
            options,
        })
    }

    pub fn tag(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Tag(TagElement {
            name: name.into(),
            children,
        })
    }
}

impl ArgStyle {
    pub fn text(value: impl Into<String>) -> Self {
        ArgStyle::Text(value.into())
    }

    pub fn date_time(pattern: impl Into<String>) -> Self {
        ArgStyle::DateTime(DateTimeSkeleton {
            pattern: pattern.into(),
        })
    }
}

impl SkeletonToken {
    pub fn new(stem: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }
}
