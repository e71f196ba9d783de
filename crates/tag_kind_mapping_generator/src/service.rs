/// A unit of work run against a tag kind list, such as a single mapping pass.
pub trait TagKindService {
    type Result;

    fn run(&mut self) -> Self::Result;
}
