/*!
# `READ <variable>[,<variable>...]`

## Purpose
Take the next items from the `DATA` list.

## Remarks
Each variable takes one item. A string variable stores the item as
text. A numeric variable converts it like `VAL`. Reading past the
last item is an `OUT OF DATA` error.

## Example
```text
10 READ W$,N
20 PRINT N;W$
30 DATA "CATS",9
RUN
9 CATS
```

*/
