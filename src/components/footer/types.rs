pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
    pub highlighted: bool,
}

impl FooterItem {
    pub fn new(key: &'static str, desc: &'static str) -> Self {
        Self {
            key,
            desc,
            highlighted: false,
        }
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }
}

pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}
