//! Type reference and type literal rendering.

use btfgen_core::{Datasec, Int, Linkage, Member, Type, TypeId, VarSecinfo};

use super::GoFormatter;
use crate::error::ResultExt;
use crate::layout::{gap, size_of, write_padding};
use crate::qualifiers::skip_qualifiers;
use crate::{FormatError, Location};

impl GoFormatter<'_> {
    /// Write the name of a named type, or a literal describing it.
    ///
    /// ```text
    /// foo                  (if foo is in the name table)
    /// uint32
    /// ```
    pub(super) fn write_type(
        &self,
        out: &mut String,
        id: TypeId,
        depth: usize,
    ) -> Result<(), FormatError> {
        let id = skip_qualifiers(self.graph, id)?;

        if let Some(name) = self.names.get(&id).filter(|name| !name.is_empty()) {
            out.push_str(name);
            return Ok(());
        }

        self.write_type_lit(out, id, depth)
    }

    /// Write a literal describing the type, ignoring the name table for `id`
    /// itself.
    ///
    /// ```text
    /// struct { bar uint32; }
    /// [4]uint8
    /// ```
    pub(super) fn write_type_lit(
        &self,
        out: &mut String,
        id: TypeId,
        depth: usize,
    ) -> Result<(), FormatError> {
        let depth = depth + 1;
        if depth > self.config.max_depth {
            return Err(FormatError::TooDeep);
        }

        let id = skip_qualifiers(self.graph, id)?;
        let ty = self.lookup(id)?;

        let result = match ty {
            Type::Int(int) => {
                write_int_lit(out, int);
                Ok(())
            }
            Type::Enum(_) => {
                out.push_str("int32");
                Ok(())
            }
            Type::Typedef(typedef) => self.write_type(out, typedef.ty, depth),
            Type::Array(array) => {
                out.push_str(&format!("[{}]", array.nelems));
                self.write_type(out, array.ty, depth)
            }
            Type::Struct(st) => self.write_struct_lit(out, st.size, &st.members, depth),
            // Go has no unions: the first member stands in for the whole
            // union, padded out to the union's size.
            Type::Union(union) => {
                let first = union.members.get(..1).unwrap_or(&[]);
                self.write_struct_lit(out, union.size, first, depth)
            }
            Type::Datasec(datasec) => self.write_datasec_lit(out, datasec, depth),
            Type::Void
            | Type::Float(_)
            | Type::Pointer(_)
            | Type::Fwd(_)
            | Type::Qualifier(_)
            | Type::Func(_)
            | Type::FuncProto(_)
            | Type::Var(_) => Err(FormatError::UnsupportedKind { kind: ty.kind() }),
        };

        result.at(|| Location::Type(self.graph.describe(id)))
    }

    fn write_struct_lit(
        &self,
        out: &mut String,
        size: u32,
        members: &[Member],
        depth: usize,
    ) -> Result<(), FormatError> {
        out.push_str("struct { ");

        let mut prev_end = 0;
        for (i, member) in members.iter().enumerate() {
            self.write_struct_field(out, member, &mut prev_end, depth)
                .at(|| Location::Field(i))?;
        }

        write_padding(out, gap(prev_end, size)?);
        out.push('}');
        Ok(())
    }

    fn write_struct_field(
        &self,
        out: &mut String,
        member: &Member,
        prev_end: &mut u32,
        depth: usize,
    ) -> Result<(), FormatError> {
        if member.name.is_empty() {
            return Err(FormatError::AnonymousField);
        }
        if member.bitfield_size > 0 {
            return Err(FormatError::BitfieldUnsupported {
                bits: member.bitfield_size,
            });
        }
        if member.offset_bits % 8 != 0 {
            return Err(FormatError::MisalignedOffset {
                offset_bits: member.offset_bits,
            });
        }

        let size = size_of(self.graph, member.ty)?;

        let offset = member.offset_bits / 8;
        write_padding(out, gap(*prev_end, offset)?);
        *prev_end = offset.checked_add(size).ok_or(FormatError::SizeOverflow)?;

        out.push_str(&self.identifier.apply(&member.name));
        out.push(' ');
        self.write_type(out, member.ty, depth)?;
        out.push_str("; ");
        Ok(())
    }

    fn write_datasec_lit(
        &self,
        out: &mut String,
        datasec: &Datasec,
        depth: usize,
    ) -> Result<(), FormatError> {
        out.push_str("struct { ");

        let mut prev_end = 0;
        for (i, entry) in datasec.vars.iter().enumerate() {
            self.write_datasec_var(out, entry, &mut prev_end, depth)
                .at(|| Location::Variable(i))?;
        }

        write_padding(out, gap(prev_end, datasec.size)?);
        out.push('}');
        Ok(())
    }

    fn write_datasec_var(
        &self,
        out: &mut String,
        entry: &VarSecinfo,
        prev_end: &mut u32,
        depth: usize,
    ) -> Result<(), FormatError> {
        let var = match self.lookup(entry.var)? {
            Type::Var(var) => var,
            other => return Err(FormatError::UnsupportedKind { kind: other.kind() }),
        };

        // Only globals are visible to user space; padding is computed
        // between emitted variables.
        if var.linkage != Linkage::Global {
            tracing::trace!(name = %var.name, linkage = ?var.linkage, "skipping variable");
            return Ok(());
        }
        if var.name.is_empty() {
            return Err(FormatError::EmptyVariableName);
        }

        write_padding(out, gap(*prev_end, entry.offset)?);
        *prev_end = entry
            .offset
            .checked_add(entry.size)
            .ok_or(FormatError::SizeOverflow)?;

        out.push_str(&self.identifier.apply(&var.name));
        out.push(' ');
        self.write_type(out, var.ty, depth)?;
        out.push_str("; ");
        Ok(())
    }
}

fn write_int_lit(out: &mut String, int: &Int) {
    // The char encoding flag has no Go counterpart and is ignored.
    if int.encoding.is_bool() && int.size == 1 {
        out.push_str("bool");
        return;
    }

    let bits = u64::from(int.size) * 8;
    if int.encoding.is_signed() {
        out.push_str(&format!("int{bits}"));
    } else {
        out.push_str(&format!("uint{bits}"));
    }
}
